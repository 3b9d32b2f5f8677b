//! Demo-mode rule table
//!
//! An ordered list of (predicate, handler) pairs evaluated against the
//! lower-cased input and the current topic context. First match wins, so a
//! rule later in the table never sees input an earlier rule accepted.

use super::Resolution;
use crate::goal::{
    format_dollars, Goal, BLUE, BRAND_GREEN, CAR_ICON, ENTERTAINMENT_ICON, ORANGE, TRIP_ICON,
};
use crate::session::TopicContext;
use regex::Regex;
use std::sync::LazyLock;

pub const TOP_SPENDING_REPLY: &str =
    "You are spending the most on Entertainment ($210 this month). Would you like to set a limit on it?";
pub const LIMIT_CONFIRMED_REPLY: &str = "Done! I've set a $150 monthly limit on Entertainment for you. I'll notify you if you get close to it.";
pub const TRIP_QUESTION_REPLY: &str =
    "That sounds exciting! How much do you need to save for your trip?";
pub const ENCOURAGEMENT_REPLY: &str = "Setting goals is the best way to grow your savings! Tell me what you're saving for, like \"save $5000 for a car\" or \"plan a trip\".";
pub const GREETING_REPLY: &str = "Hi there! I'm your MySpend assistant. Ask me where you're spending the most, or tell me about a savings goal.";
pub const HELP_REPLY: &str = "I'm currently in demo mode, so I only know a few tricks. Try asking \"where am I spending the most?\" or \"I want to save $5000 for a car\".";

pub const ENTERTAINMENT_LIMIT_NAME: &str = "Entertainment Limit";
pub const ENTERTAINMENT_LIMIT_AMOUNT: &str = "$150.00";
pub const TRIP_FUND_NAME: &str = "Trip Fund";
pub const CAR_FUND_NAME: &str = "New Car Fund";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d[\d,]*)(k\b)?").expect("amount pattern"));
static CAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"save \$?([\d,]+) for (?:a )?car").expect("car pattern"));
static SPEND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bspend(?:s|ing)?\b").expect("spend pattern"));
static MOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:most|top)\b").expect("most pattern"));
static TRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:trip|vacation)s?\b").expect("trip pattern"));
static DESTINATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"trip to (?:the )?([a-z]+)").expect("destination pattern"));
static GREETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:hi|hello|hey|howdy|good (?:morning|afternoon|evening))\b")
        .expect("greeting pattern")
});

/// What a rule sees
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// Lower-cased user text
    pub text: &'a str,
    pub topic: TopicContext,
}

/// One entry of the table
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&RuleInput<'_>) -> bool,
    pub respond: fn(&RuleInput<'_>) -> Resolution,
}

/// The table, in priority order. The last rule matches everything.
pub static RULES: [Rule; 8] = [
    Rule {
        name: "spending-limit-confirmation",
        matches: is_limit_confirmation,
        respond: respond_limit_confirmation,
    },
    Rule {
        name: "trip-amount",
        matches: is_trip_amount,
        respond: respond_trip_amount,
    },
    Rule {
        name: "top-spending",
        matches: is_top_spending,
        respond: respond_top_spending,
    },
    Rule {
        name: "trip-planning",
        matches: is_trip_planning,
        respond: respond_trip_planning,
    },
    Rule {
        name: "car-goal",
        matches: is_car_goal,
        respond: respond_car_goal,
    },
    Rule {
        name: "savings-encouragement",
        matches: is_savings_talk,
        respond: respond_encouragement,
    },
    Rule {
        name: "greeting",
        matches: is_greeting,
        respond: respond_greeting,
    },
    Rule {
        name: "help",
        matches: always,
        respond: help,
    },
];

fn is_limit_confirmation(input: &RuleInput<'_>) -> bool {
    input.topic == TopicContext::AwaitingSpendingLimitConfirmation
        && (input.text.contains("limit") || input.text.contains("budget"))
}

fn is_trip_amount(input: &RuleInput<'_>) -> bool {
    input.topic == TopicContext::AwaitingTripAmount && parse_amount(input.text).is_some()
}

fn is_top_spending(input: &RuleInput<'_>) -> bool {
    SPEND_RE.is_match(input.text) && MOST_RE.is_match(input.text)
}

fn is_trip_planning(input: &RuleInput<'_>) -> bool {
    TRIP_RE.is_match(input.text)
}

fn is_car_goal(input: &RuleInput<'_>) -> bool {
    CAR_RE.is_match(input.text)
}

fn is_savings_talk(input: &RuleInput<'_>) -> bool {
    input.text.contains("goal") || input.text.contains("save")
}

fn is_greeting(input: &RuleInput<'_>) -> bool {
    GREETING_RE.is_match(input.text)
}

fn always(_: &RuleInput<'_>) -> bool {
    true
}

fn respond_limit_confirmation(_: &RuleInput<'_>) -> Resolution {
    Resolution::reply(LIMIT_CONFIRMED_REPLY, TopicContext::None).with_goal(
        Goal::new(ENTERTAINMENT_LIMIT_NAME, ENTERTAINMENT_LIMIT_AMOUNT)
            .with_icon(ENTERTAINMENT_ICON)
            .with_color(ORANGE),
    )
}

fn respond_top_spending(_: &RuleInput<'_>) -> Resolution {
    Resolution::reply(
        TOP_SPENDING_REPLY,
        TopicContext::AwaitingSpendingLimitConfirmation,
    )
}

fn respond_encouragement(input: &RuleInput<'_>) -> Resolution {
    Resolution::reply(ENCOURAGEMENT_REPLY, input.topic)
}

fn respond_greeting(input: &RuleInput<'_>) -> Resolution {
    Resolution::reply(GREETING_REPLY, input.topic)
}

fn help(input: &RuleInput<'_>) -> Resolution {
    Resolution::reply(HELP_REPLY, input.topic)
}

fn respond_trip_amount(input: &RuleInput<'_>) -> Resolution {
    let Some(amount) = parse_amount(input.text) else {
        return help(input);
    };
    let reply = format!(
        "Perfect! I've created a {TRIP_FUND_NAME} goal of {amount}. Every bit you set aside gets you closer to your trip!"
    );
    Resolution::reply(reply, TopicContext::None).with_goal(
        Goal::new(TRIP_FUND_NAME, amount)
            .with_icon(TRIP_ICON)
            .with_color(BLUE),
    )
}

fn respond_trip_planning(input: &RuleInput<'_>) -> Resolution {
    let reply = match DESTINATION_RE.captures(input.text).and_then(|c| c.get(1)) {
        Some(destination) => format!(
            "A trip to {} sounds amazing! How much do you need to save?",
            capitalize(destination.as_str())
        ),
        None => TRIP_QUESTION_REPLY.to_string(),
    };
    Resolution::reply(reply, TopicContext::AwaitingTripAmount)
}

fn respond_car_goal(input: &RuleInput<'_>) -> Resolution {
    let Some(amount) = CAR_RE.captures(input.text).and_then(|c| c.get(1)) else {
        return help(input);
    };
    let display = format!("${}", amount.as_str());
    let reply = format!("Great goal! I've set up a target of {display} for your new car.");
    Resolution::reply(reply, input.topic).with_goal(
        Goal::new(CAR_FUND_NAME, display)
            .with_icon(CAR_ICON)
            .with_color(BRAND_GREEN),
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Find the first amount like `2k`, `$1,500` or `800` and render it as `$2,000`.
///
/// A trailing `k` multiplies the digits by 1000.
pub fn parse_amount(text: &str) -> Option<String> {
    let caps = AMOUNT_RE.captures(text)?;
    let digits: String = caps.get(1)?.as_str().chars().filter(char::is_ascii_digit).collect();
    let value: u64 = digits.parse().ok()?;
    let value = if caps.get(2).is_some() {
        value.checked_mul(1000)?
    } else {
        value
    };
    Some(format_dollars(value))
}

/// First rule that accepts the input
pub fn matching_rule(input: &RuleInput<'_>) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// Run the table against raw user text
pub fn evaluate(text: &str, topic: TopicContext) -> Resolution {
    let lowered = text.to_lowercase();
    let input = RuleInput {
        text: &lowered,
        topic,
    };
    let rule = matching_rule(&input);
    tracing::debug!(rule = rule.name, topic = topic.as_str(), "Demo rule matched");
    (rule.respond)(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_name(text: &str, topic: TopicContext) -> &'static str {
        let lowered = text.to_lowercase();
        matching_rule(&RuleInput {
            text: &lowered,
            topic,
        })
        .name
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "spending-limit-confirmation",
                "trip-amount",
                "top-spending",
                "trip-planning",
                "car-goal",
                "savings-encouragement",
                "greeting",
                "help",
            ]
        );
    }

    #[test]
    fn test_limit_confirmation_sets_goal_and_clears_context() {
        let res = evaluate(
            "set a limit please",
            TopicContext::AwaitingSpendingLimitConfirmation,
        );
        assert_eq!(res.reply, LIMIT_CONFIRMED_REPLY);
        assert_eq!(res.topic, TopicContext::None);
        let goal = res.goal.expect("goal");
        assert_eq!(goal.name, "Entertainment Limit");
        assert_eq!(goal.target_amount, "$150.00");
        assert_eq!(goal.icon, "fa-film");
        assert_eq!(goal.color, "#FF9800");
    }

    #[test]
    fn test_limit_without_context_does_not_trigger() {
        let res = evaluate("set a limit please", TopicContext::None);
        assert!(res.goal.is_none());
        assert_eq!(res.reply, HELP_REPLY);
        assert_eq!(res.topic, TopicContext::None);
    }

    #[test]
    fn test_budget_also_confirms() {
        assert_eq!(
            rule_name(
                "Yes, budget it",
                TopicContext::AwaitingSpendingLimitConfirmation
            ),
            "spending-limit-confirmation"
        );
    }

    #[test]
    fn test_unmatched_follow_up_keeps_context() {
        let res = evaluate("no thanks", TopicContext::AwaitingSpendingLimitConfirmation);
        assert!(res.goal.is_none());
        assert_eq!(res.topic, TopicContext::AwaitingSpendingLimitConfirmation);

        let res = evaluate("not sure yet", TopicContext::AwaitingTripAmount);
        assert_eq!(res.topic, TopicContext::AwaitingTripAmount);
    }

    #[test]
    fn test_trip_amount_with_k_suffix() {
        let res = evaluate("2k", TopicContext::AwaitingTripAmount);
        let goal = res.goal.expect("goal");
        assert_eq!(goal.name, "Trip Fund");
        assert_eq!(goal.target_amount, "$2,000");
        assert_eq!(goal.icon, "fa-plane");
        assert_eq!(res.topic, TopicContext::None);
        assert!(res.reply.contains("$2,000"));
    }

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount("2k").as_deref(), Some("$2,000"));
        assert_eq!(parse_amount("about $1500 i think").as_deref(), Some("$1,500"));
        assert_eq!(parse_amount("$3,250").as_deref(), Some("$3,250"));
        assert_eq!(parse_amount("800").as_deref(), Some("$800"));
        assert_eq!(parse_amount("12k for the flights").as_deref(), Some("$12,000"));
        assert_eq!(parse_amount("20km away").as_deref(), Some("$20"));
        assert_eq!(parse_amount("no idea"), None);
    }

    #[test]
    fn test_first_number_is_the_amount() {
        assert_eq!(parse_amount("in 2 weeks, about 3k").as_deref(), Some("$2"));
        let res = evaluate("in 2 weeks, about 3k", TopicContext::AwaitingTripAmount);
        assert_eq!(res.goal.expect("goal").target_amount, "$2");
    }

    #[test]
    fn test_top_spending_sets_context() {
        let res = evaluate("Where am I spending the most?", TopicContext::None);
        assert_eq!(res.reply, TOP_SPENDING_REPLY);
        assert_eq!(res.topic, TopicContext::AwaitingSpendingLimitConfirmation);
        assert!(res.goal.is_none());

        assert_eq!(
            rule_name("what is my top spending category", TopicContext::None),
            "top-spending"
        );
    }

    #[test]
    fn test_trip_planning_asks_for_amount() {
        let res = evaluate("I want to plan a trip to Japan", TopicContext::None);
        assert_eq!(
            res.reply,
            "A trip to Japan sounds amazing! How much do you need to save?"
        );
        assert_eq!(res.topic, TopicContext::AwaitingTripAmount);

        let res = evaluate("Thinking about a vacation", TopicContext::None);
        assert_eq!(res.reply, TRIP_QUESTION_REPLY);
        assert_eq!(res.topic, TopicContext::AwaitingTripAmount);
    }

    #[test]
    fn test_trip_then_amount_flow() {
        let first = evaluate("vacation time!", TopicContext::None);
        let second = evaluate("$1,200", first.topic);
        assert_eq!(second.goal.expect("goal").target_amount, "$1,200");
        assert_eq!(second.topic, TopicContext::None);
    }

    #[test]
    fn test_car_goal() {
        let res = evaluate("I want to save $5000 for a car", TopicContext::None);
        let goal = res.goal.expect("goal");
        assert_eq!(goal.name, "New Car Fund");
        assert_eq!(goal.target_amount, "$5000");
        assert_eq!(goal.icon, "fa-car");
        assert_eq!(goal.color, "#008a00");
        assert!(res.reply.contains("$5000"));
    }

    #[test]
    fn test_generic_save_and_goal() {
        assert_eq!(rule_name("help me save", TopicContext::None), "savings-encouragement");
        let res = evaluate("I have a goal", TopicContext::AwaitingTripAmount);
        assert_eq!(res.reply, ENCOURAGEMENT_REPLY);
        assert_eq!(res.topic, TopicContext::AwaitingTripAmount);
    }

    #[test]
    fn test_greeting_requires_whole_word() {
        assert_eq!(rule_name("Hello!", TopicContext::None), "greeting");
        assert_eq!(rule_name("good morning", TopicContext::None), "greeting");
        assert_eq!(rule_name("this is odd", TopicContext::None), "help");
    }

    #[test]
    fn test_context_rules_take_priority() {
        // A number under trip context wins over the car rule
        assert_eq!(
            rule_name("save $5000 for a car", TopicContext::AwaitingTripAmount),
            "trip-amount"
        );
        // Limit confirmation wins over everything once the context is set
        assert_eq!(
            rule_name(
                "limit my spending the most",
                TopicContext::AwaitingSpendingLimitConfirmation
            ),
            "spending-limit-confirmation"
        );
    }
}
