use crate::handlers;
use crate::store::StateStore;
use axum::{routing::{get, post}, Router};

pub fn router(store: StateStore) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/health/water", post(handlers::log_water))
        .route("/api/health/meals", post(handlers::log_meal))
        .route("/api/health/steps", post(handlers::simulate_steps))
        .route("/api/health/conditions", post(handlers::toggle_condition))
        .route("/api/style/context", post(handlers::set_style_context))
        .route("/api/money/transactions", post(handlers::add_transaction))
        .route("/api/ai/tone", post(handlers::set_ai_tone))
        .route("/api/ai/ask", post(handlers::ask))
        .route("/api/weather", get(handlers::get_weather))
        .with_state(store)
}
