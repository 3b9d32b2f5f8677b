//! Structured goal payload decoder
//!
//! A remote reply may end with a delimited block recording a goal:
//!
//! ```text
//! Great plan! I've set that up for you.
//! |||GOAL_JSON
//! {"name": "New Car Fund", "amount": "$5,000", "icon": "fa-car", "color": "#008a00"}
//! |||
//! ```
//!
//! Text outside the block is what the user sees.

use crate::goal::{Goal, BRAND_GREEN, DEFAULT_ICON};
use serde::Deserialize;

/// Line that opens the block
pub const GOAL_START: &str = "|||GOAL_JSON";
/// Line that closes the block
pub const GOAL_END: &str = "|||";

/// Outcome of scanning a reply for a goal block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalPayload {
    /// A well-formed block; `display_text` has the block removed
    Found { goal: Goal, display_text: String },
    /// A block is present but cannot be used
    Malformed { reason: String },
    /// No block in the reply
    Absent,
}

#[derive(Debug, Deserialize)]
struct RawGoal {
    name: String,
    amount: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Scan `raw` for a goal block
pub fn decode(raw: &str) -> GoalPayload {
    let Some((before, after_start)) = raw.split_once(GOAL_START) else {
        return GoalPayload::Absent;
    };

    let Some((start_line_rest, rest)) = after_start.split_once('\n') else {
        return malformed("no line break after start marker");
    };
    if !start_line_rest.trim().is_empty() {
        return malformed("unexpected text on start marker line");
    }

    let end_marker = format!("\n{GOAL_END}");
    let Some((body, after)) = rest.split_once(end_marker.as_str()) else {
        return malformed("missing end marker");
    };

    let parsed: RawGoal = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return malformed(format!("invalid goal JSON: {e}")),
    };

    if parsed.name.trim().is_empty() || parsed.amount.trim().is_empty() {
        return malformed("goal name and amount must not be empty");
    }

    let goal = Goal {
        name: parsed.name,
        target_amount: parsed.amount,
        icon: non_blank(parsed.icon).unwrap_or_else(|| DEFAULT_ICON.to_string()),
        color: non_blank(parsed.color).unwrap_or_else(|| BRAND_GREEN.to_string()),
    };

    GoalPayload::Found {
        goal,
        display_text: format!("{before}{after}").trim().to_string(),
    }
}

fn malformed(reason: impl Into<String>) -> GoalPayload {
    GoalPayload::Malformed {
        reason: reason.into(),
    }
}

/// Render a goal as a block, the inverse of [`decode`]
pub fn encode(goal: &Goal) -> String {
    let body = serde_json::json!({
        "name": goal.name,
        "amount": goal.target_amount,
        "icon": goal.icon,
        "color": goal.color,
    });
    format!("{GOAL_START}\n{body}\n{GOAL_END}")
}
