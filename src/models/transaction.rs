use serde::{Deserialize, Serialize};

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Category attached to an expense, as stored by the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    /// Hex color for charts.
    pub color: String,
}

/// A logged income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub category: Option<CategoryRef>,
}

/// A category seeded for every new user at onboarding.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeedCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}
