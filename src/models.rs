use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full application record. Field names stay camelCase on the wire so the
/// persisted file keeps the same shape the UI reads back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    pub user: UserProfile,
    pub goals: Goals,
    pub health: Health,
    pub style: Style,
    pub money: Money,
    pub ai: AiPanel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub initials: String,
    pub streak_days: u32,
    pub theme: String,
    pub notification_level: NotificationLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Joseph Stayton".to_string(),
            initials: "J".to_string(),
            streak_days: 6,
            theme: "dark".to_string(),
            notification_level: NotificationLevel::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Minimal,
    Standard,
    Intense,
}

impl Default for NotificationLevel {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Goals {
    pub steps_per_day: u64,
    pub weekly_spend_limit: f64,
    pub water_glasses_per_day: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            steps_per_day: 10_000,
            weekly_spend_limit: 250.0,
            water_glasses_per_day: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Health {
    pub steps: StepCounts,
    pub calories_burned: u32,
    pub minutes_active: u32,
    pub sleep_hours: f64,
    pub hydration: Hydration,
    pub sugar: SugarIntake,
    pub carbs: CarbIntake,
    pub conditions: Conditions,
    pub meals: Vec<Meal>,
    pub environment: Environment,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            steps: StepCounts::default(),
            calories_burned: 425,
            minutes_active: 52,
            sleep_hours: 6.5,
            hydration: Hydration::default(),
            sugar: SugarIntake::default(),
            carbs: CarbIntake::default(),
            conditions: Conditions::default(),
            meals: vec![
                Meal {
                    meal_type: "Breakfast".to_string(),
                    time: "7:42 AM".to_string(),
                    description: "Oatmeal, banana".to_string(),
                    sugar: 8,
                    carbs: 40,
                    flagged: false,
                },
                Meal {
                    meal_type: "Lunch".to_string(),
                    time: "12:11 PM".to_string(),
                    description: "Grilled chicken, rice".to_string(),
                    sugar: 4,
                    carbs: 55,
                    flagged: false,
                },
                Meal {
                    meal_type: "Snack".to_string(),
                    time: "3:02 PM".to_string(),
                    description: "Soda (32g sugar)".to_string(),
                    sugar: 32,
                    carbs: 48,
                    flagged: true,
                },
            ],
            environment: Environment::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StepCounts {
    pub walk: u64,
    pub jog: u64,
    pub run: u64,
}

impl StepCounts {
    pub fn total(&self) -> u64 {
        self.walk + self.jog + self.run
    }
}

impl Default for StepCounts {
    fn default() -> Self {
        Self {
            walk: 4200,
            jog: 1100,
            run: 900,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Hydration {
    pub glasses: u32,
}

impl Default for Hydration {
    fn default() -> Self {
        Self { glasses: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SugarIntake {
    pub grams: u32,
    pub daily_cap: u32,
}

impl Default for SugarIntake {
    fn default() -> Self {
        Self {
            grams: 38,
            daily_cap: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CarbIntake {
    pub grams: u32,
    pub daily_cap: u32,
}

impl Default for CarbIntake {
    fn default() -> Self {
        Self {
            grams: 145,
            daily_cap: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Conditions {
    pub kidney_support: bool,
    pub weight_loss: bool,
    pub diabetes: bool,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            kidney_support: true,
            weight_loss: true,
            diabetes: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub time: String,
    pub description: String,
    pub sugar: u32,
    pub carbs: u32,
    pub flagged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    pub inside: bool,
    pub uv_index: u8,
    pub temperature_f: i32,
    pub minutes_in_sun: u32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            inside: false,
            uv_index: 7,
            temperature_f: 88,
            minutes_in_sun: 22,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    pub active_context: StyleContext,
    pub closet_counts: ClosetCounts,
    pub todays_outfit: Outfit,
    pub weather: StyleWeather,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            active_context: StyleContext::Work,
            closet_counts: ClosetCounts::default(),
            todays_outfit: Outfit::default(),
            weather: StyleWeather::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleContext {
    Work,
    Gym,
    Casual,
    Date,
    Event,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::Work
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClosetCounts {
    pub tops: u32,
    pub bottoms: u32,
    pub shoes: u32,
    pub jackets: u32,
}

impl Default for ClosetCounts {
    fn default() -> Self {
        Self {
            tops: 24,
            bottoms: 15,
            shoes: 7,
            jackets: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Outfit {
    pub label: String,
    pub items: Vec<OutfitItem>,
}

impl Default for Outfit {
    fn default() -> Self {
        Self {
            label: "Smart casual · Weather-ready".to_string(),
            items: vec![
                OutfitItem {
                    name: "Navy jacket".to_string(),
                    description: "Clean, sharp outer layer".to_string(),
                },
                OutfitItem {
                    name: "Sky blue pinstripe shirt".to_string(),
                    description: "Contrast with jacket, brightens face".to_string(),
                },
                OutfitItem {
                    name: "Dark jeans".to_string(),
                    description: "Balanced and timeless".to_string(),
                },
                OutfitItem {
                    name: "White sneakers".to_string(),
                    description: "Keeps the look modern".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutfitItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleWeather {
    pub temp_f: i32,
    pub condition: String,
    pub uv_index: u8,
    pub notes: Vec<String>,
}

impl Default for StyleWeather {
    fn default() -> Self {
        Self {
            temp_f: 62,
            condition: "Partly cloudy".to_string(),
            uv_index: 5,
            notes: vec![
                "Light jacket".to_string(),
                "Dry".to_string(),
                "Mild breeze".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Money {
    pub this_week_total: f64,
    pub delta_from_last_week: f64,
    pub categories: Vec<SpendCategory>,
    pub transactions: Vec<Transaction>,
}

impl Default for Money {
    fn default() -> Self {
        Self {
            this_week_total: 312.0,
            delta_from_last_week: 34.0,
            categories: vec![
                SpendCategory::new("Groceries", 112.0),
                SpendCategory::new("Eating out", 86.0),
                SpendCategory::new("Gas / transport", 54.0),
                SpendCategory::new("Subscriptions", 40.0),
                SpendCategory::new("Other", 20.0),
            ],
            transactions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SpendCategory {
    pub name: String,
    pub amount: f64,
}

impl SpendCategory {
    pub fn new(name: &str, amount: f64) -> Self {
        Self {
            name: name.to_string(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub category: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AiPanel {
    pub tone: AiTone,
    pub free_questions_left: u32,
    pub messages: Vec<ChatMessage>,
}

impl Default for AiPanel {
    fn default() -> Self {
        Self {
            tone: AiTone::Coach,
            free_questions_left: 3,
            messages: vec![
                ChatMessage {
                    from: Sender::Ai,
                    text: "I'm your life coach in your pocket.\nAsk me anything about your health, habits, money, style, or day.".to_string(),
                },
                ChatMessage {
                    from: Sender::User,
                    text: "What should I eat today with my kidney issues and my budget?".to_string(),
                },
                ChatMessage {
                    from: Sender::Ai,
                    text: [
                        "Alright, listen. We're keeping sodium low and money in your pocket.",
                        "Here's a simple plan:",
                        "\u{2022} Breakfast: Oatmeal + berries",
                        "\u{2022} Lunch: Grilled chicken + steamed veggies (no heavy sauces)",
                        "\u{2022} Dinner: Rice + beans + side salad",
                        "Drink water with every meal. No sugary drinks today. You can handle that.",
                    ]
                    .join("\n"),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiTone {
    Coach,
    Gentle,
}

impl Default for AiTone {
    fn default() -> Self {
        Self::Coach
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Default for Sender {
    fn default() -> Self {
        Self::Ai
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatMessage {
    pub from: Sender,
    pub text: String,
}

// ---- Request / response bodies -------------------------------------------

#[derive(Debug, Deserialize)]
pub struct WaterRequest {
    pub glasses: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRequest {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub time: String,
    pub description: String,
    pub sugar: u32,
    pub carbs: u32,
    #[serde(default)]
    pub flagged: bool,
}

#[derive(Debug, Deserialize)]
pub struct StepsRequest {
    #[serde(default)]
    pub walk: u64,
    #[serde(default)]
    pub jog: u64,
    #[serde(default)]
    pub run: u64,
}

#[derive(Debug, Deserialize)]
pub struct ConditionRequest {
    pub name: String,
    pub on: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ContextRequest {
    pub context: StyleContext,
}

#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct ToneRequest {
    pub tone: AiTone,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub reply: String,
    pub free_questions_left: u32,
    pub paywalled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temp_f: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_mph: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_documented_values() {
        let state = AppState::default();
        assert_eq!(state.user.name, "Joseph Stayton");
        assert_eq!(state.user.streak_days, 6);
        assert_eq!(state.goals.steps_per_day, 10_000);
        assert_eq!(state.health.hydration.glasses, 5);
        assert_eq!(state.health.sugar.grams, 38);
        assert_eq!(state.health.sugar.daily_cap, 50);
        assert_eq!(state.health.meals.len(), 3);
        assert_eq!(state.money.this_week_total, 312.0);
        assert_eq!(state.money.categories.len(), 5);
        assert!(state.money.transactions.is_empty());
        assert_eq!(state.ai.free_questions_left, 3);
        assert_eq!(state.ai.messages.len(), 3);
    }

    #[test]
    fn partial_record_merges_over_defaults() {
        let state: AppState =
            serde_json::from_str(r#"{ "health": { "hydration": { "glasses": 7 } } }"#).unwrap();
        assert_eq!(state.health.hydration.glasses, 7);
        assert_eq!(state.user.name, "Joseph Stayton");
        assert_eq!(state.health.sugar.grams, 38);
        assert_eq!(state.health.meals.len(), 3);
        assert_eq!(state.money.this_week_total, 312.0);
    }

    #[test]
    fn partial_intake_keeps_its_cap() {
        let state: AppState =
            serde_json::from_str(r#"{ "health": { "sugar": { "grams": 40 } } }"#).unwrap();
        assert_eq!(state.health.sugar.grams, 40);
        assert_eq!(state.health.sugar.daily_cap, 50);
        assert_eq!(state.health.carbs.daily_cap, 200);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        assert!(json["goals"]["stepsPerDay"].is_number());
        assert!(json["money"]["thisWeekTotal"].is_number());
        assert!(json["ai"]["freeQuestionsLeft"].is_number());
        assert_eq!(json["health"]["meals"][0]["type"], "Breakfast");
        assert_eq!(json["style"]["activeContext"], "work");
    }

    #[test]
    fn unknown_persisted_fields_are_ignored() {
        let state: AppState =
            serde_json::from_str(r#"{ "legacyField": 1, "user": { "streakDays": 9 } }"#).unwrap();
        assert_eq!(state.user.streak_days, 9);
        assert_eq!(state.user.name, "Joseph Stayton");
    }
}
