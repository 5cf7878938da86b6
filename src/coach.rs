use crate::models::{AiTone, AppState};

/// Topics the coach can answer about, resolved by the first matching keyword
/// set in a fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Kidney,
    Sugar,
    Money,
    Outfit,
    Water,
    Steps,
    General,
}

impl Topic {
    pub fn detect(question: &str) -> Self {
        let q = question.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| q.contains(w));

        if has(&["kidney", "renal"]) {
            Topic::Kidney
        } else if has(&["sugar", "carb"]) {
            Topic::Sugar
        } else if has(&["money", "spend", "budget"]) {
            Topic::Money
        } else if has(&["outfit", "clothes", "wear"]) {
            Topic::Outfit
        } else if has(&["water", "hydrate", "dehydrated"]) {
            Topic::Water
        } else if has(&["steps", "walk", "run", "jog"]) {
            Topic::Steps
        } else {
            Topic::General
        }
    }
}

/// Builds a canned reply for the question, interpolating live numbers from
/// the snapshot where the topic calls for them.
pub fn generate_reply(state: &AppState, question: &str) -> String {
    let tone = state.ai.tone;
    match Topic::detect(question) {
        Topic::Kidney => kidney_reply(tone),
        Topic::Sugar => sugar_reply(tone),
        Topic::Money => money_reply(state, tone),
        Topic::Outfit => outfit_reply(state, tone),
        Topic::Water => water_reply(state, tone),
        Topic::Steps => steps_reply(state, tone),
        Topic::General => general_reply(tone),
    }
}

pub const PAYWALL_MESSAGE: &str =
    "You've hit your free question limit. Upgrade your membership to keep the conversation going.";

fn kidney_reply(tone: AiTone) -> String {
    match tone {
        AiTone::Gentle => [
            "Because of kidney health, we want to protect you from high sodium and heavy processed foods.",
            "Here's a simple, gentle framework for today:",
            "\u{2022} Focus on fresh or frozen vegetables over canned.",
            "\u{2022} Choose baked or grilled proteins without heavy sauces.",
            "\u{2022} Avoid salty snacks, canned soups, and deli meats.",
            "Drink water regularly and keep notes of how you feel. Slow and steady wins here.",
        ]
        .join("\n"),
        AiTone::Coach => [
            "Listen, your kidneys don't need extra punishment.",
            "Here's today's move:",
            "\u{2022} No salty junk, no canned soups, no processed deli meats.",
            "\u{2022} Baked or grilled proteins, light seasoning, lots of veggies.",
            "\u{2022} Water with every meal.",
            "You're in control of this. Protect your kidneys like they're your retirement account.",
        ]
        .join("\n"),
    }
}

fn sugar_reply(tone: AiTone) -> String {
    match tone {
        AiTone::Gentle => [
            "Your body runs better when sugar is in check.",
            "Try this today:",
            "\u{2022} Replace at least one soda or juice with water or unsweet tea.",
            "\u{2022} If you want something sweet, choose fruit instead of candy.",
            "\u{2022} Keep desserts small and earlier in the day.",
            "Tiny adjustments add up faster than you think.",
        ]
        .join("\n"),
        AiTone::Coach => [
            "Too much sugar is silently slowing you down.",
            "Here's how we attack it today:",
            "\u{2022} One sugary drink? Fine. More than that? No.",
            "\u{2022} If you're craving sweet, grab fruit, not candy.",
            "\u{2022} No sugar bombs late at night.",
            "You're not a slave to sugar. You call the shots.",
        ]
        .join("\n"),
    }
}

fn money_reply(state: &AppState, tone: AiTone) -> String {
    let total = state.money.this_week_total;
    let over = total - state.goals.weekly_spend_limit;

    match tone {
        AiTone::Gentle => [
            format!("You've spent about {} so far this week.", format_money(total)),
            if over > 0.0 {
                format!(
                    "That's around {} over your target, but you can still course-correct.",
                    format_money(over)
                )
            } else {
                "You're still under your target. That's a good sign.".to_string()
            },
            "One simple adjustment:".to_string(),
            "\u{2022} Choose one meal at home instead of ordering out.".to_string(),
            "\u{2022} Pause one non-essential purchase.".to_string(),
            "You don't need perfection. You just need direction.".to_string(),
        ]
        .join("\n"),
        AiTone::Coach => [
            format!("You're at {} this week.", format_money(total)),
            if over > 0.0 {
                format!(
                    "That's about {} over your target. That's your wake-up call.",
                    format_money(over)
                )
            } else {
                "You're still under your goal. Good. Let's keep it that way.".to_string()
            },
            "Here's what you do:".to_string(),
            "\u{2022} No more random impulse buys this week.".to_string(),
            "\u{2022} One solid grocery run beats five drive-thru trips.".to_string(),
            "You either tell your money where to go, or it disappears. Your choice.".to_string(),
        ]
        .join("\n"),
    }
}

fn outfit_reply(state: &AppState, tone: AiTone) -> String {
    let weather = &state.style.weather;
    let mut lines = vec![format!(
        "Based on the weather ({}\u{b0}F, {}) and your smart-casual vibe, here's the fit:",
        weather.temp_f, weather.condition
    )];
    lines.extend(
        state
            .style
            .todays_outfit
            .items
            .iter()
            .map(|item| format!("\u{2022} {} \u{2013} {}", item.name, item.description)),
    );
    lines.push(match tone {
        AiTone::Gentle => {
            "Choose what feels most like you, and keep it simple and clean. Confidence comes from consistency."
                .to_string()
        }
        AiTone::Coach => {
            "No overthinking. Clean, sharp, and intentional. Walk out the door looking like you did it on purpose."
                .to_string()
        }
    });
    lines.join("\n")
}

fn water_reply(state: &AppState, tone: AiTone) -> String {
    let current = state.health.hydration.glasses;
    let target = state.goals.water_glasses_per_day;
    let remaining = target.saturating_sub(current);
    let plural = if remaining == 1 { "" } else { "es" };

    match tone {
        AiTone::Gentle => [
            format!("You've had {current} glasses of water so far. Your goal is {target}."),
            if remaining > 0 {
                format!("You're only {remaining} glass{plural} away.")
            } else {
                "You've already hit your goal. Nicely done.".to_string()
            },
            "Take one small step: grab one glass now and sip it slowly.".to_string(),
        ]
        .join("\n"),
        AiTone::Coach => [
            format!("Water check: {current}/{target} glasses."),
            if remaining > 0 {
                format!("You're {remaining} glass{plural} behind. Fix that with one glass right now.")
            } else {
                "You already hit your goal. That's what I like to see.".to_string()
            },
            "Your brain, your mood, your energy: water touches all of it. Handle it.".to_string(),
        ]
        .join("\n"),
    }
}

fn steps_reply(state: &AppState, tone: AiTone) -> String {
    let total = state.health.steps.total();
    let goal = state.goals.steps_per_day;
    let remaining = goal.saturating_sub(total);

    match tone {
        AiTone::Gentle => [
            format!(
                "You're at {} steps today. Your goal is {}.",
                group_thousands(total),
                group_thousands(goal)
            ),
            if remaining > 0 {
                format!("You're only {} steps short.", group_thousands(remaining))
            } else {
                "You've already hit your goal. That's great work.".to_string()
            },
            "Take a short walk break. 5-10 minutes is enough to move the needle.".to_string(),
        ]
        .join("\n"),
        AiTone::Coach => [
            format!(
                "Steps so far: {} / {}.",
                group_thousands(total),
                group_thousands(goal)
            ),
            if remaining > 0 {
                format!(
                    "That's {} short. Don't negotiate with yourself.",
                    group_thousands(remaining)
                )
            } else {
                "Goal hit. That's how it's done.".to_string()
            },
            "Stand up, put the phone in your pocket, and give me one more quick loop. No excuses."
                .to_string(),
        ]
        .join("\n"),
    }
}

fn general_reply(tone: AiTone) -> String {
    match tone {
        AiTone::Gentle => [
            "I've got you.",
            "Ask me about one of these next:",
            "\u{2022} Your health (steps, water, sugar, sleep)",
            "\u{2022} Your money (spending, saving, goals)",
            "\u{2022} Your style (outfits, what to wear today)",
            "\u{2022} Your routine (what to focus on today)",
            "We'll take it one smart move at a time.",
        ]
        .join("\n"),
        AiTone::Coach => [
            "Okay, here's the deal:",
            "You've got health to protect, money to manage, and a life to tighten up.",
            "Ask me something specific about:",
            "\u{2022} Health (steps, food, water, or conditions)",
            "\u{2022} Money (spending, cutting back, or planning)",
            "\u{2022} Style (what to wear, how to present yourself)",
            "You lead with a question. I'll meet you with a plan.",
        ]
        .join("\n"),
    }
}

pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${:.0}", amount.abs())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_routing_priority() {
        assert_eq!(Topic::detect("kidney and money advice"), Topic::Kidney);
        assert_eq!(Topic::detect("too many carbs?"), Topic::Sugar);
        assert_eq!(Topic::detect("my BUDGET this week"), Topic::Money);
        assert_eq!(Topic::detect("what should I wear"), Topic::Outfit);
        assert_eq!(Topic::detect("am I dehydrated"), Topic::Water);
        assert_eq!(Topic::detect("should I jog tonight"), Topic::Steps);
        assert_eq!(Topic::detect("how is my day going"), Topic::General);
    }

    #[test]
    fn sugar_beats_money_when_both_match() {
        assert_eq!(Topic::detect("sugar spend"), Topic::Sugar);
    }

    #[test]
    fn money_reply_reports_overspend_against_limit() {
        let state = AppState::default();
        // default total 312 vs limit 250
        let reply = generate_reply(&state, "how is my spending");
        assert!(reply.contains("$312"));
        assert!(reply.contains("$62"));
    }

    #[test]
    fn money_reply_under_limit_changes_wording() {
        let mut state = AppState::default();
        state.money.this_week_total = 100.0;
        let reply = generate_reply(&state, "money");
        assert!(reply.contains("$100"));
        assert!(reply.contains("under your goal"));
    }

    #[test]
    fn water_reply_counts_remaining_glasses() {
        let state = AppState::default();
        // 5 of 8 glasses
        let reply = generate_reply(&state, "water status");
        assert!(reply.contains("5/8"));
        assert!(reply.contains("3 glasses behind"));
    }

    #[test]
    fn water_reply_singular_glass() {
        let mut state = AppState::default();
        state.health.hydration.glasses = 7;
        let reply = generate_reply(&state, "water");
        assert!(reply.contains("1 glass behind"));
    }

    #[test]
    fn steps_reply_groups_thousands() {
        let state = AppState::default();
        // 4200 + 1100 + 900 = 6200 of 10000
        let reply = generate_reply(&state, "steps today");
        assert!(reply.contains("6,200 / 10,000"));
        assert!(reply.contains("3,800 short"));
    }

    #[test]
    fn tone_switches_the_voice() {
        let mut state = AppState::default();
        let coach = generate_reply(&state, "kidney");
        state.ai.tone = AiTone::Gentle;
        let gentle = generate_reply(&state, "kidney");
        assert_ne!(coach, gentle);
        assert!(gentle.contains("gentle framework"));
    }

    #[test]
    fn outfit_reply_lists_every_item() {
        let state = AppState::default();
        let reply = generate_reply(&state, "pick my outfit");
        for item in &state.style.todays_outfit.items {
            assert!(reply.contains(&item.name));
        }
        assert!(reply.contains("62\u{b0}F"));
    }

    #[test]
    fn format_money_rounds_and_signs() {
        assert_eq!(format_money(312.0), "$312");
        assert_eq!(format_money(-34.4), "-$34");
        assert_eq!(format_money(0.0), "$0");
    }
}
