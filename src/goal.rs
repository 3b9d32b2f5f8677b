//! Savings goals and currency display helpers

use serde::{Deserialize, Serialize};

/// Generic savings icon used when none is given
pub const DEFAULT_ICON: &str = "fa-piggy-bank";
/// Brand green, the default card color
pub const BRAND_GREEN: &str = "#008a00";

pub const CAR_ICON: &str = "fa-car";
pub const TRIP_ICON: &str = "fa-plane";
pub const ENTERTAINMENT_ICON: &str = "fa-film";

pub const ORANGE: &str = "#FF9800";
pub const BLUE: &str = "#2196F3";

/// A savings or limit target surfaced as a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    /// Currency display string, e.g. "$1,000"
    #[serde(rename = "amount")]
    pub target_amount: String,
    pub icon: String,
    pub color: String,
}

impl Goal {
    /// Goal with the default icon and color
    pub fn new(name: impl Into<String>, target_amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_amount: target_amount.into(),
            icon: DEFAULT_ICON.to_string(),
            color: BRAND_GREEN.to_string(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Insert thousands separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format whole dollars as `$1,234`
pub fn format_dollars(amount: u64) -> String {
    format!("${}", group_thousands(&amount.to_string()))
}

/// Format an unsigned cent amount as `$1,234.56`
pub fn format_cents(cents: u64) -> String {
    format!(
        "${}.{:02}",
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Format a signed cent amount the way transaction rows show it:
/// `- $24.50` for debits, `+ $2,450.00` for credits.
pub fn format_signed_cents(cents: i64) -> String {
    let sign = if cents < 0 { "- " } else { "+ " };
    format!("{sign}{}", format_cents(cents.unsigned_abs()))
}
