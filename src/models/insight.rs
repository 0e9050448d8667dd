use serde::{Deserialize, Serialize};

/// Lifetime income/expense aggregates over all transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlow {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
    /// Net savings as a percentage of income, 0 when there is no income.
    pub savings_rate_pct: f64,
}

/// Expense total for one category, for pie/bar charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// The "money tree" health model. Habits are the roots, spending is
/// the trunk, savings drive growth, goal progress bears fruit, and bad
/// choices attract pests. All percentage components are in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeHealth {
    pub roots: f64,
    pub trunk: f64,
    pub growth: f64,
    pub goal_progress_pct: f64,
    pub fruits: usize,
    pub pests: usize,
    pub overall: f64,
}

/// Icon hint for a garden tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipIcon {
    Heart,
    Droplets,
    Sun,
    Wind,
    Sparkles,
}

/// A personalized nudge derived from tree health.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GardenTip {
    pub icon: TipIcon,
    pub text: &'static str,
    pub color: &'static str,
}
