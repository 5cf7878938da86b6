use crate::models::{AiTone, AppState, Meal, Sender, SpendCategory, StyleContext, Transaction};
use crate::storage::persist_state;
use rand::RngExt;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::error;

pub const HYDRATION_MAX_GLASSES: u32 = 40;
pub const SUGAR_MAX_GRAMS: u32 = 500;
pub const CARBS_MAX_GRAMS: u32 = 800;
pub const SUN_MINUTES_MAX: u32 = 180;

/// Pretend last-week spend baseline; the delta is measured against this fixed
/// value rather than a tracked history.
pub const LAST_WEEK_BASELINE: f64 = 278.0;

const CALORIES_PER_STEP: f64 = 0.04;
const ACTIVE_MINUTES_PER_STEP: f64 = 0.01;

/// Sole owner of the application record. Every write goes through [`update`],
/// which swaps in the next state and persists it before returning; the mutex
/// keeps operations atomic from the caller's point of view.
///
/// [`update`]: StateStore::update
#[derive(Clone)]
pub struct StateStore {
    data_path: PathBuf,
    state: Arc<Mutex<AppState>>,
}

impl StateStore {
    pub fn new(data_path: PathBuf, state: AppState) -> Self {
        Self {
            data_path,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Read-only copy of the current record.
    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Applies a pure mutator to a copy of the current record, swaps the
    /// result in, and persists it. A failed write is logged and swallowed;
    /// the in-memory record stays authoritative.
    pub async fn update<F>(&self, mutate: F) -> AppState
    where
        F: FnOnce(AppState) -> AppState,
    {
        let mut guard = self.state.lock().await;
        let next = mutate(guard.clone());
        *guard = next.clone();
        if let Err(err) = persist_state(&self.data_path, &guard).await {
            error!("failed to persist state: {err}");
        }
        next
    }

    // ---- Health -----------------------------------------------------------

    pub async fn log_water(&self, glasses: i64) -> AppState {
        self.update(|mut draft| {
            draft.health.hydration.glasses = clamped_add(
                draft.health.hydration.glasses,
                glasses,
                HYDRATION_MAX_GLASSES,
            );
            draft
        })
        .await
    }

    pub async fn log_meal(&self, meal: Meal) -> AppState {
        self.update(move |mut draft| {
            draft.health.sugar.grams =
                clamped_add(draft.health.sugar.grams, meal.sugar as i64, SUGAR_MAX_GRAMS);
            draft.health.carbs.grams =
                clamped_add(draft.health.carbs.grams, meal.carbs as i64, CARBS_MAX_GRAMS);
            draft.health.meals.push(meal);
            draft
        })
        .await
    }

    /// Bumps the step counters and derives calorie and active-minute credit
    /// from the total steps added.
    pub async fn simulate_steps(&self, extra_walk: u64, extra_jog: u64, extra_run: u64) -> AppState {
        self.update(move |mut draft| {
            let steps = &mut draft.health.steps;
            steps.walk = steps.walk.saturating_add(extra_walk);
            steps.jog = steps.jog.saturating_add(extra_jog);
            steps.run = steps.run.saturating_add(extra_run);
            let total_added = extra_walk
                .saturating_add(extra_jog)
                .saturating_add(extra_run) as f64;
            draft.health.calories_burned = draft
                .health
                .calories_burned
                .saturating_add((total_added * CALORIES_PER_STEP).round() as u32);
            draft.health.minutes_active = draft
                .health
                .minutes_active
                .saturating_add((total_added * ACTIVE_MINUTES_PER_STEP).round() as u32);
            draft
        })
        .await
    }

    /// Sets or flips a condition flag. Unrecognized names leave the record
    /// untouched.
    pub async fn toggle_condition(&self, name: &str, on: Option<bool>) -> AppState {
        let name = name.to_string();
        self.update(move |mut draft| {
            let flag = match name.as_str() {
                "kidneySupport" => Some(&mut draft.health.conditions.kidney_support),
                "weightLoss" => Some(&mut draft.health.conditions.weight_loss),
                "diabetes" => Some(&mut draft.health.conditions.diabetes),
                _ => None,
            };
            if let Some(flag) = flag {
                *flag = on.unwrap_or(!*flag);
            }
            draft
        })
        .await
    }

    // ---- Style ------------------------------------------------------------

    pub async fn set_style_context(&self, context: StyleContext) -> AppState {
        self.update(move |mut draft| {
            draft.style.active_context = context;
            draft
        })
        .await
    }

    // ---- Money ------------------------------------------------------------

    /// Appends a transaction, recomputes the weekly total from the full
    /// transaction list, and upserts the matching category bucket
    /// (case-insensitive name match).
    pub async fn add_transaction(&self, tx: Transaction) -> AppState {
        self.update(move |mut draft| {
            match draft
                .money
                .categories
                .iter_mut()
                .find(|c| c.name.eq_ignore_ascii_case(&tx.category))
            {
                Some(cat) => cat.amount += tx.amount,
                None => draft.money.categories.push(SpendCategory {
                    name: tx.category.clone(),
                    amount: tx.amount,
                }),
            }
            draft.money.transactions.push(tx);
            let week_total: f64 = draft.money.transactions.iter().map(|t| t.amount).sum();
            draft.money.this_week_total = week_total;
            draft.money.delta_from_last_week = week_total - LAST_WEEK_BASELINE;
            draft
        })
        .await
    }

    // ---- AI ---------------------------------------------------------------

    pub async fn set_ai_tone(&self, tone: AiTone) -> AppState {
        self.update(move |mut draft| {
            draft.ai.tone = tone;
            draft
        })
        .await
    }

    pub async fn add_ai_message(&self, from: Sender, text: String) -> AppState {
        self.update(move |mut draft| {
            draft.ai.messages.push(crate::models::ChatMessage { from, text });
            draft
        })
        .await
    }

    /// Quota check and consumption in a single update, so two asks racing at
    /// one remaining question cannot both pass. When a question is available,
    /// appends the user message, decrements the counter, and returns the new
    /// state; `None` means the quota was already exhausted and nothing
    /// changed.
    pub async fn consume_ai_question(&self, question: String) -> Option<AppState> {
        let mut accepted = false;
        let state = self
            .update(|mut draft| {
                if draft.ai.free_questions_left > 0 {
                    draft.ai.free_questions_left -= 1;
                    draft.ai.messages.push(crate::models::ChatMessage {
                        from: Sender::User,
                        text: question,
                    });
                    accepted = true;
                }
                draft
            })
            .await;
        accepted.then_some(state)
    }

    /// Consumes one free question; a no-op once the counter hits zero.
    pub async fn use_ai_question(&self) -> AppState {
        self.update(|mut draft| {
            if draft.ai.free_questions_left > 0 {
                draft.ai.free_questions_left -= 1;
            }
            draft
        })
        .await
    }

    // ---- Environment ------------------------------------------------------

    /// Simulated sensor drift: redraws inside/outside, UV, and temperature,
    /// and accrues sun time while outside.
    pub async fn randomize_environment(&self) -> AppState {
        self.update(|mut draft| {
            let mut rng = rand::rng();
            let now_outside = rng.random_bool(0.6);
            let env = &mut draft.health.environment;
            env.inside = !now_outside;
            env.uv_index = rng.random_range(0.0..=10.0_f64).round() as u8;
            env.temperature_f = rng.random_range(40.0..=102.0_f64).round() as i32;
            if now_outside {
                let bump = rng.random_range(1.0..=6.0_f64).round() as i64;
                env.minutes_in_sun = clamped_add(env.minutes_in_sun, bump, SUN_MINUTES_MAX);
            }
            draft
        })
        .await
    }
}

fn clamped_add(current: u32, delta: i64, max: u32) -> u32 {
    (current as i64).saturating_add(delta).clamp(0, max as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_store() -> StateStore {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "life_hack_os_store_{}_{}.json",
            std::process::id(),
            nanos
        ));
        StateStore::new(path, AppState::default())
    }

    fn tx(category: &str, amount: f64) -> Transaction {
        Transaction {
            category: category.to_string(),
            amount,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn water_clamps_at_both_bounds() {
        let store = test_store();
        let state = store.log_water(1_000).await;
        assert_eq!(state.health.hydration.glasses, HYDRATION_MAX_GLASSES);
        let state = store.log_water(-10_000).await;
        assert_eq!(state.health.hydration.glasses, 0);
    }

    #[tokio::test]
    async fn water_saturates_on_extreme_deltas() {
        let store = test_store();
        let state = store.log_water(i64::MAX).await;
        assert_eq!(state.health.hydration.glasses, HYDRATION_MAX_GLASSES);
        let state = store.log_water(i64::MIN).await;
        assert_eq!(state.health.hydration.glasses, 0);
    }

    #[tokio::test]
    async fn water_adds_one_by_default_path() {
        let store = test_store();
        let before = store.snapshot().await.health.hydration.glasses;
        let state = store.log_water(1).await;
        assert_eq!(state.health.hydration.glasses, before + 1);
    }

    #[tokio::test]
    async fn meal_appends_and_clamps_intake() {
        let store = test_store();
        let state = store
            .log_meal(Meal {
                meal_type: "Dinner".to_string(),
                time: "6:30 PM".to_string(),
                description: "Pasta".to_string(),
                sugar: 12,
                carbs: 90,
                flagged: false,
            })
            .await;
        assert_eq!(state.health.meals.len(), 4);
        assert_eq!(state.health.sugar.grams, 38 + 12);
        assert_eq!(state.health.carbs.grams, 145 + 90);

        let state = store
            .log_meal(Meal {
                sugar: 9_999,
                carbs: 9_999,
                ..Meal::default()
            })
            .await;
        assert_eq!(state.health.sugar.grams, SUGAR_MAX_GRAMS);
        assert_eq!(state.health.carbs.grams, CARBS_MAX_GRAMS);
    }

    #[tokio::test]
    async fn steps_derive_calories_and_minutes() {
        let store = test_store();
        let before = store.snapshot().await;
        let state = store.simulate_steps(1000, 0, 0).await;
        assert_eq!(state.health.steps.walk, before.health.steps.walk + 1000);
        assert_eq!(state.health.calories_burned, before.health.calories_burned + 40);
        assert_eq!(state.health.minutes_active, before.health.minutes_active + 10);
    }

    #[tokio::test]
    async fn steps_total_mixes_all_kinds() {
        let store = test_store();
        let before = store.snapshot().await;
        let state = store.simulate_steps(100, 200, 300).await;
        assert_eq!(
            state.health.steps.total(),
            before.health.steps.total() + 600
        );
        // 600 * 0.04 = 24, 600 * 0.01 = 6
        assert_eq!(state.health.calories_burned, before.health.calories_burned + 24);
        assert_eq!(state.health.minutes_active, before.health.minutes_active + 6);
    }

    #[tokio::test]
    async fn steps_saturate_on_extreme_counts() {
        let store = test_store();
        let state = store.simulate_steps(u64::MAX, 1, 0).await;
        assert_eq!(state.health.steps.walk, u64::MAX);
        assert_eq!(state.health.calories_burned, u32::MAX);
        assert_eq!(state.health.minutes_active, u32::MAX);
    }

    #[tokio::test]
    async fn condition_toggle_matrix() {
        let store = test_store();
        let state = store.toggle_condition("diabetes", Some(true)).await;
        assert!(state.health.conditions.diabetes);
        let state = store.toggle_condition("diabetes", Some(true)).await;
        assert!(state.health.conditions.diabetes);
        let state = store.toggle_condition("diabetes", None).await;
        assert!(!state.health.conditions.diabetes);
        let state = store.toggle_condition("kidneySupport", None).await;
        assert!(!state.health.conditions.kidney_support);
    }

    #[tokio::test]
    async fn unknown_condition_is_a_no_op() {
        let store = test_store();
        let before = store.snapshot().await;
        let state = store.toggle_condition("unknownKey", Some(true)).await;
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn transaction_updates_existing_category_case_insensitively() {
        let store = test_store();
        let state = store.add_transaction(tx("groceries", 15.0)).await;
        let cat = state
            .money
            .categories
            .iter()
            .find(|c| c.name == "Groceries")
            .unwrap();
        assert_eq!(cat.amount, 112.0 + 15.0);
        assert_eq!(state.money.categories.len(), 5);
        assert_eq!(state.money.this_week_total, 15.0);
        assert_eq!(state.money.delta_from_last_week, 15.0 - LAST_WEEK_BASELINE);
    }

    #[tokio::test]
    async fn transaction_appends_new_category() {
        let store = test_store();
        let state = store.add_transaction(tx("Pets", 20.0)).await;
        let cat = state
            .money
            .categories
            .iter()
            .find(|c| c.name == "Pets")
            .unwrap();
        assert_eq!(cat.amount, 20.0);
        assert_eq!(state.money.categories.len(), 6);
    }

    #[tokio::test]
    async fn weekly_total_is_sum_of_all_transactions() {
        let store = test_store();
        store.add_transaction(tx("Groceries", 15.0)).await;
        store.add_transaction(tx("Pets", 20.0)).await;
        let state = store.add_transaction(tx("Other", 7.5)).await;
        let sum: f64 = state.money.transactions.iter().map(|t| t.amount).sum();
        assert_eq!(state.money.this_week_total, sum);
        assert_eq!(state.money.this_week_total, 42.5);
        assert_eq!(state.money.delta_from_last_week, 42.5 - LAST_WEEK_BASELINE);
    }

    #[tokio::test]
    async fn free_questions_count_down_and_floor_at_zero() {
        let store = test_store();
        assert_eq!(store.use_ai_question().await.ai.free_questions_left, 2);
        assert_eq!(store.use_ai_question().await.ai.free_questions_left, 1);
        assert_eq!(store.use_ai_question().await.ai.free_questions_left, 0);
        assert_eq!(store.use_ai_question().await.ai.free_questions_left, 0);
    }

    #[tokio::test]
    async fn consume_accepts_until_quota_is_gone() {
        let store = test_store();
        store
            .update(|mut draft| {
                draft.ai.free_questions_left = 1;
                draft
            })
            .await;

        let state = store
            .consume_ai_question("first".to_string())
            .await
            .unwrap();
        assert_eq!(state.ai.free_questions_left, 0);
        assert_eq!(state.ai.messages.last().unwrap().text, "first");

        let messages_before = state.ai.messages.len();
        assert!(store.consume_ai_question("second".to_string()).await.is_none());
        let state = store.snapshot().await;
        assert_eq!(state.ai.free_questions_left, 0);
        assert_eq!(state.ai.messages.len(), messages_before);
    }

    #[tokio::test]
    async fn racing_consumers_take_exactly_one_question() {
        let store = test_store();
        store
            .update(|mut draft| {
                draft.ai.free_questions_left = 1;
                draft
            })
            .await;

        let (a, b) = tokio::join!(
            store.consume_ai_question("left".to_string()),
            store.consume_ai_question("right".to_string())
        );
        assert!(a.is_some() != b.is_some());
        assert_eq!(store.snapshot().await.ai.free_questions_left, 0);
    }

    #[tokio::test]
    async fn messages_and_tone() {
        let store = test_store();
        let state = store.set_ai_tone(AiTone::Gentle).await;
        assert_eq!(state.ai.tone, AiTone::Gentle);
        let state = store
            .add_ai_message(Sender::User, "hello".to_string())
            .await;
        assert_eq!(state.ai.messages.len(), 4);
        assert_eq!(state.ai.messages.last().unwrap().from, Sender::User);
    }

    #[tokio::test]
    async fn style_context_overwrites() {
        let store = test_store();
        let state = store.set_style_context(StyleContext::Gym).await;
        assert_eq!(state.style.active_context, StyleContext::Gym);
    }

    #[tokio::test]
    async fn snapshot_is_stable_without_updates() {
        let store = test_store();
        let a = store.snapshot().await;
        let b = store.snapshot().await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn snapshot_mutation_does_not_leak_back() {
        let store = test_store();
        let mut copy = store.snapshot().await;
        copy.health.hydration.glasses = 99;
        assert_eq!(store.snapshot().await.health.hydration.glasses, 5);
    }

    #[tokio::test]
    async fn environment_stays_in_documented_ranges() {
        let store = test_store();
        for _ in 0..50 {
            let state = store.randomize_environment().await;
            let env = &state.health.environment;
            assert!(env.uv_index <= 10);
            assert!((40..=102).contains(&env.temperature_f));
            assert!(env.minutes_in_sun <= SUN_MINUTES_MAX);
        }
    }
}
