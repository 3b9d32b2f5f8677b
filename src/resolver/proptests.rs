//! Property-based tests for the resolver strategies
//!
//! - "save $N for a car" always yields a car goal of exactly `$N`
//! - A `Nk` answer to the trip question creates the fund and clears context
//! - Limit talk never creates a goal outside the confirmation context
//! - Goal blocks are stripped from the text they arrive in
//! - A malformed block leaves the reply untouched
//! - The failure fallback depends only on its input

use super::rules::{self, CAR_FUND_NAME, TRIP_FUND_NAME};
use super::{fallback_resolution, interpret_reply, FALLBACK_APOLOGY};
use crate::goal::{format_dollars, Goal};
use crate::payload::{self, GOAL_END, GOAL_START};
use crate::session::TopicContext;
use proptest::prelude::*;

fn arb_topic() -> impl Strategy<Value = TopicContext> {
    prop_oneof![
        Just(TopicContext::None),
        Just(TopicContext::AwaitingSpendingLimitConfirmation),
        Just(TopicContext::AwaitingTripAmount),
    ]
}

fn arb_goal() -> impl Strategy<Value = Goal> {
    (
        "[A-Z][A-Za-z ]{0,19}",
        "\\$[1-9][0-9,]{0,7}",
        "fa-[a-z]{2,10}",
        "#[0-9A-F]{6}",
    )
        .prop_map(|(name, amount, icon, color)| {
            Goal::new(name, amount).with_icon(icon).with_color(color)
        })
}

/// Reply text with no delimiter characters
fn arb_reply_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .!?']{0,60}"
}

proptest! {
    #[test]
    fn prop_car_goal_uses_stated_amount(n in 1u32..10_000_000, with_dollar in any::<bool>()) {
        let sign = if with_dollar { "$" } else { "" };
        let res = rules::evaluate(&format!("I want to save {sign}{n} for a car"), TopicContext::None);

        let goal = res.goal.expect("car goal");
        prop_assert_eq!(goal.name, CAR_FUND_NAME);
        prop_assert_eq!(goal.target_amount, format!("${n}"));
        prop_assert_eq!(res.topic, TopicContext::None);
    }

    #[test]
    fn prop_trip_amount_in_thousands(n in 1u64..1000) {
        let res = rules::evaluate(&format!("{n}k"), TopicContext::AwaitingTripAmount);

        prop_assert_eq!(res.topic, TopicContext::None);
        let goal = res.goal.expect("trip goal");
        prop_assert_eq!(goal.name, TRIP_FUND_NAME);
        prop_assert_eq!(goal.target_amount, format_dollars(n * 1000));
    }

    #[test]
    fn prop_limit_needs_confirmation_context(
        words in "[a-z ]{0,30}",
        topic in prop_oneof![Just(TopicContext::None), Just(TopicContext::AwaitingTripAmount)],
    ) {
        let res = rules::evaluate(&format!("set a limit {words}"), topic);
        prop_assert!(res.goal.is_none());
    }

    #[test]
    fn prop_goal_block_is_stripped(text in arb_reply_text(), goal in arb_goal()) {
        let raw = format!("{text}\n{}", payload::encode(&goal));
        let res = interpret_reply(raw, TopicContext::None);

        prop_assert_eq!(res.reply, text.trim());
        prop_assert_eq!(res.goal, Some(goal));
    }

    #[test]
    fn prop_malformed_block_keeps_raw_text(
        text in arb_reply_text(),
        junk in "[a-z ]{1,20}",
        topic in arb_topic(),
    ) {
        let raw = format!("{text}\n{GOAL_START}\n{junk}\n{GOAL_END}");
        let res = interpret_reply(raw.clone(), topic);

        prop_assert_eq!(res.reply, raw);
        prop_assert!(res.goal.is_none());
        prop_assert_eq!(res.topic, topic);
    }

    #[test]
    fn prop_fallback_is_deterministic(text in "[A-Za-z0-9 $,]{0,40}", topic in arb_topic()) {
        let first = fallback_resolution(&text, topic);
        let second = fallback_resolution(&text, topic);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.reply.starts_with(FALLBACK_APOLOGY));
        prop_assert!(first.goal.is_none());
        prop_assert_eq!(first.topic, topic);
    }
}
