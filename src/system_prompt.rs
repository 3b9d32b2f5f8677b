//! System instruction for the remote assistant persona
//!
//! Describes the persona and the goal payload convention the resolver
//! decodes. The delimiters come from [`crate::payload`] so the prompt and the
//! decoder cannot drift apart.

use crate::goal::{BRAND_GREEN, DEFAULT_ICON};
use crate::payload::{GOAL_END, GOAL_START};

/// Persona description
const PERSONA: &str = r"You are a helpful and friendly financial assistant for the MySpend dashboard.
Your goal is to help users manage their finances and set goals.";

/// Icon identifiers the dashboard knows how to draw
const ICONS: &[(&str, &str)] = &[
    ("fa-car", "vehicles"),
    ("fa-house", "home"),
    ("fa-plane", "travel"),
    ("fa-piggy-bank", "general savings"),
    ("fa-graduation-cap", "education"),
    ("fa-ring", "wedding"),
    ("fa-laptop", "electronics"),
    ("fa-shirt", "clothing"),
];

/// Card colors and what they are used for
const COLORS: &[(&str, &str)] = &[
    ("#008a00", "Brand Green - default"),
    ("#FF9800", "Orange - dining/fun"),
    ("#2196F3", "Blue - travel/tech"),
    ("#9C27B0", "Purple - long term"),
    ("#F44336", "Red - debt"),
];

const CLOSING: &str = r"Keep your textual response concise, encouraging, and friendly. Do not mention the JSON in your text.
If you are asked about things outside of finance, try to bring it back to financial goals if possible, or just answer helpfully.";

/// Build the full system instruction
pub fn build_system_prompt() -> String {
    use std::fmt::Write;

    let mut prompt = String::from(PERSONA);
    prompt.push_str("\n\nIf the user wants to set a financial goal, you MUST include a special JSON block at the end of your response (and nowhere else).\nThe format is:\n");
    let _ = write!(
        prompt,
        "{GOAL_START}\n{{\n  \"name\": \"Goal Name\",\n  \"amount\": \"$1,000\",\n  \"icon\": \"{DEFAULT_ICON}\",\n  \"color\": \"{BRAND_GREEN}\"\n}}\n{GOAL_END}\n"
    );

    prompt.push_str("\nCommon icons to use:\n");
    for (icon, purpose) in ICONS {
        let _ = writeln!(prompt, "- {icon} (for {purpose})");
    }

    prompt.push_str("\nColors:\n");
    for (color, purpose) in COLORS {
        let _ = writeln!(prompt, "- {color} ({purpose})");
    }

    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt
}
