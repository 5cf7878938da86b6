use crate::coach::{self, PAYWALL_MESSAGE};
use crate::errors::AppError;
use crate::models::{
    AppState, AskRequest, AskResponse, ConditionRequest, ContextRequest, Meal, MealRequest,
    Sender, StepsRequest, ToneRequest, Transaction, TransactionRequest, WaterRequest,
    WeatherReport,
};
use crate::store::StateStore;
use crate::ui::render_index;
use crate::weather::fetch_weather;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

pub async fn index(State(store): State<StateStore>) -> Html<String> {
    let state = store.snapshot().await;
    Html(render_index(&state))
}

pub async fn get_state(State(store): State<StateStore>) -> Json<AppState> {
    Json(store.snapshot().await)
}

pub async fn log_water(
    State(store): State<StateStore>,
    Json(payload): Json<WaterRequest>,
) -> Result<Json<AppState>, AppError> {
    let glasses = payload.glasses.unwrap_or(1);
    if glasses == 0 {
        return Err(AppError::bad_request("glasses must be a non-zero integer"));
    }

    Ok(Json(store.log_water(glasses).await))
}

pub async fn log_meal(
    State(store): State<StateStore>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<AppState>, AppError> {
    if payload.description.trim().is_empty() {
        return Err(AppError::bad_request("meal description must not be empty"));
    }

    let meal = Meal {
        meal_type: payload.meal_type,
        time: payload.time,
        description: payload.description,
        sugar: payload.sugar,
        carbs: payload.carbs,
        flagged: payload.flagged,
    };
    Ok(Json(store.log_meal(meal).await))
}

pub async fn simulate_steps(
    State(store): State<StateStore>,
    Json(payload): Json<StepsRequest>,
) -> Result<Json<AppState>, AppError> {
    if payload.walk == 0 && payload.jog == 0 && payload.run == 0 {
        return Err(AppError::bad_request(
            "at least one of walk, jog, run must be positive",
        ));
    }

    Ok(Json(
        store
            .simulate_steps(payload.walk, payload.jog, payload.run)
            .await,
    ))
}

pub async fn toggle_condition(
    State(store): State<StateStore>,
    Json(payload): Json<ConditionRequest>,
) -> Json<AppState> {
    Json(store.toggle_condition(&payload.name, payload.on).await)
}

pub async fn set_style_context(
    State(store): State<StateStore>,
    Json(payload): Json<ContextRequest>,
) -> Json<AppState> {
    Json(store.set_style_context(payload.context).await)
}

pub async fn add_transaction(
    State(store): State<StateStore>,
    Json(payload): Json<TransactionRequest>,
) -> Result<Json<AppState>, AppError> {
    let category = payload.category.trim();
    if category.is_empty() {
        return Err(AppError::bad_request("category must not be empty"));
    }
    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return Err(AppError::bad_request("amount must be a positive number"));
    }

    let tx = Transaction {
        category: category.to_string(),
        amount: payload.amount,
        created_at: Utc::now(),
    };
    Ok(Json(store.add_transaction(tx).await))
}

pub async fn set_ai_tone(
    State(store): State<StateStore>,
    Json(payload): Json<ToneRequest>,
) -> Json<AppState> {
    Json(store.set_ai_tone(payload.tone).await)
}

/// Full ask flow: quota check, user message, reply generation, AI message.
/// An exhausted quota is not an error; the paywall notice comes back as a
/// normal reply.
pub async fn ask(
    State(store): State<StateStore>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return Err(AppError::bad_request("question must not be empty"));
    }

    let Some(state) = store.consume_ai_question(question.clone()).await else {
        store
            .add_ai_message(Sender::Ai, PAYWALL_MESSAGE.to_string())
            .await;
        return Ok(Json(AskResponse {
            reply: PAYWALL_MESSAGE.to_string(),
            free_questions_left: 0,
            paywalled: true,
        }));
    };

    let reply = coach::generate_reply(&state, &question);
    let state = store.add_ai_message(Sender::Ai, reply.clone()).await;

    Ok(Json(AskResponse {
        reply,
        free_questions_left: state.ai.free_questions_left,
        paywalled: false,
    }))
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub zip: String,
}

pub async fn get_weather(
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, AppError> {
    let zip = query.zip.trim();
    if zip.is_empty() {
        return Err(AppError::bad_request("zip must not be empty"));
    }

    let client = reqwest::Client::new();
    match fetch_weather(&client, zip).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            warn!("weather lookup failed: {err:?}");
            Err(AppError::bad_gateway("Couldn't load weather right now."))
        }
    }
}
