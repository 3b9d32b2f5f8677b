//! Read-only dashboard data
//!
//! Everything here is fixed demo data. Amounts are kept in cents (or whole
//! dollars for chart series) and rendered with the shared currency helpers.

use crate::goal::{format_cents, format_dollars, format_signed_cents, BRAND_GREEN, ORANGE};
use serde::Serialize;

const SPENT_THIS_MONTH: u64 = 1923;
const TYPICAL_MONTH: u64 = 2024;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub gauge: SpendingGauge,
    pub transactions: Vec<TransactionRow>,
    pub cash_flow: CashFlow,
    pub habits: Vec<CategoryShare>,
    pub money_path: MoneyPath,
    pub merchants: Vec<MerchantBar>,
}

/// This month against a typical month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingGauge {
    pub spent: String,
    pub typical: String,
    pub remaining: String,
    pub over_budget: bool,
}

impl SpendingGauge {
    pub fn new(spent: u64, typical: u64) -> Self {
        Self {
            spent: format_dollars(spent),
            typical: format_dollars(typical),
            remaining: format_dollars(typical.saturating_sub(spent)),
            over_budget: spent > typical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub title: &'static str,
    pub when: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub amount_cents: i64,
    pub display: String,
    pub income: bool,
}

impl TransactionRow {
    fn new(
        title: &'static str,
        when: &'static str,
        category: &'static str,
        icon: &'static str,
        color: &'static str,
        amount_cents: i64,
    ) -> Self {
        Self {
            title,
            when,
            category,
            icon,
            color,
            amount_cents,
            display: format_signed_cents(amount_cents),
            income: amount_cents > 0,
        }
    }
}

/// Income against expense over one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub labels: Vec<&'static str>,
    pub income: Vec<u32>,
    pub expense: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashFlow {
    pub weekly: Series,
    pub monthly: Series,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub label: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

/// Line chart with gaps where a series has no value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyPath {
    pub labels: Vec<&'static str>,
    pub income: Vec<u32>,
    pub actual: Vec<Option<u32>>,
    pub projected: Vec<Option<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MerchantTransaction {
    pub when: &'static str,
    pub amount_cents: i64,
    pub display: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Merchant {
    pub name: &'static str,
    pub count: u32,
    pub total_cents: u64,
    pub icon: &'static str,
    pub color: &'static str,
    pub transactions: &'static [(&'static str, i64)],
}

/// A merchant ready for the bar list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantBar {
    pub name: &'static str,
    pub count: u32,
    pub total: String,
    pub icon: &'static str,
    pub color: &'static str,
    /// Bar width relative to the busiest merchant
    pub percent: f64,
    pub transactions: Vec<MerchantTransaction>,
}

const MERCHANTS: [Merchant; 5] = [
    Merchant {
        name: "Uber Eats",
        count: 12,
        total_cents: 24550,
        icon: "fa-burger",
        color: ORANGE,
        transactions: &[
            ("Today, 12:30 PM", -2450),
            ("Yesterday, 6:15 PM", -3210),
            ("Nov 24, 1:45 PM", -1875),
        ],
    },
    Merchant {
        name: "Shell Station",
        count: 8,
        total_cents: 38000,
        icon: "fa-gas-pump",
        color: "#F44336",
        transactions: &[
            ("Yesterday", -4500),
            ("Nov 20", -5500),
            ("Nov 15", -6000),
        ],
    },
    Merchant {
        name: "Starbucks",
        count: 15,
        total_cents: 8520,
        icon: "fa-mug-hot",
        color: "#00796B",
        transactions: &[
            ("Today, 8:00 AM", -565),
            ("Yesterday, 8:10 AM", -620),
            ("Nov 24, 9:30 AM", -545),
        ],
    },
    Merchant {
        name: "Walmart",
        count: 4,
        total_cents: 41230,
        icon: "fa-cart-shopping",
        color: "#1976D2",
        transactions: &[("Nov 22", -12050), ("Nov 10", -29180)],
    },
    Merchant {
        name: "Netflix",
        count: 1,
        total_cents: 1699,
        icon: "fa-film",
        color: "#E50914",
        transactions: &[("Nov 15", -1699)],
    },
];

/// Sort by transaction count, busiest first, and size each bar against the
/// busiest merchant.
pub fn rank_merchants(merchants: &[Merchant]) -> Vec<MerchantBar> {
    let mut sorted = merchants.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    let max = sorted.first().map_or(0, |m| m.count);

    sorted
        .into_iter()
        .map(|m| MerchantBar {
            name: m.name,
            count: m.count,
            total: format_cents(m.total_cents),
            icon: m.icon,
            color: m.color,
            percent: if max == 0 {
                0.0
            } else {
                f64::from(m.count) / f64::from(max) * 100.0
            },
            transactions: m
                .transactions
                .iter()
                .map(|&(when, amount_cents)| MerchantTransaction {
                    when,
                    amount_cents,
                    display: format_signed_cents(amount_cents),
                })
                .collect(),
        })
        .collect()
}

fn recent_transactions() -> Vec<TransactionRow> {
    vec![
        TransactionRow::new("Uber Eats", "Today, 12:30 PM", "Food", "fa-burger", ORANGE, -2450),
        TransactionRow::new("Shell Station", "Yesterday", "Transport", "fa-gas-pump", "#F44336", -4500),
        TransactionRow::new("Spotify Premium", "Nov 24", "Entertainment", "fa-music", "#1DB954", -1199),
        TransactionRow::new("Salary Deposit", "Nov 15", "Income", "fa-money-bill-wave", BRAND_GREEN, 245_000),
    ]
}

fn cash_flow() -> CashFlow {
    CashFlow {
        weekly: Series {
            labels: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            income: vec![100, 200, 150, 100, 2600, 400, 200],
            expense: vec![45, 80, 120, 65, 210, 340, 120],
        },
        monthly: Series {
            labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            income: vec![4200, 3800, 4500, 5100, 4800, 5200],
            expense: vec![2800, 3100, 2900, 3500, 3200, 1923],
        },
        transactions: vec![
            TransactionRow::new("Salary Deposit", "Apr 29", "Income", "fa-money-bill-wave", BRAND_GREEN, 280_000),
            TransactionRow::new("Utility Bill", "Apr 25", "Bills", "fa-bolt", ORANGE, -14520),
            TransactionRow::new("E-Transfer Received", "Apr 22", "Income", "fa-arrow-down", BRAND_GREEN, 15000),
        ],
    }
}

fn habits() -> Vec<CategoryShare> {
    [
        ("Food & Dining", 35, "#F44336"),
        ("Transportation", 20, "#1976D2"),
        ("Shopping", 25, BRAND_GREEN),
        ("Entertainment", 10, ORANGE),
        ("Bills", 10, "#9C27B0"),
    ]
    .into_iter()
    .map(|(label, percent, color)| CategoryShare {
        label,
        percent,
        color,
    })
    .collect()
}

fn money_path() -> MoneyPath {
    MoneyPath {
        labels: vec!["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"],
        income: vec![2400, 2400, 2450, 2450, 2450, 2500],
        actual: vec![Some(1800), Some(1950), Some(1850), Some(1923), None, None],
        projected: vec![None, None, None, Some(1923), Some(2100), Some(2250)],
    }
}

pub fn snapshot() -> Dashboard {
    Dashboard {
        gauge: SpendingGauge::new(SPENT_THIS_MONTH, TYPICAL_MONTH),
        transactions: recent_transactions(),
        cash_flow: cash_flow(),
        habits: habits(),
        money_path: money_path(),
        merchants: rank_merchants(&MERCHANTS),
    }
}
