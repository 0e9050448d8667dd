use chrono::Local;
use tracing::info;

use crate::models::quiz::QuizAnswers;
use crate::models::transaction::{SeedCategory, Transaction, TransactionKind};

/// Default starting balance when no usable income was given.
const FALLBACK_BALANCE: f64 = 1000.0;

/// Expense categories seeded for every new user.
pub const DEFAULT_CATEGORIES: &[SeedCategory] = &[
    SeedCategory { name: "Food & Drinks", icon: "utensils", color: "#f97316" },
    SeedCategory { name: "Entertainment", icon: "gamepad", color: "#8b5cf6" },
    SeedCategory { name: "Shopping", icon: "shopping-bag", color: "#ec4899" },
    SeedCategory { name: "Transport", icon: "car", color: "#3b82f6" },
    SeedCategory { name: "Education", icon: "book", color: "#10b981" },
    SeedCategory { name: "Other", icon: "circle", color: "#6b7280" },
];

/// Play-money balance a new profile starts with: the stated monthly
/// income, or a fixed grant when none was given.
pub fn starting_balance(answers: &QuizAnswers) -> f64 {
    let income = answers.income();
    if income != 0.0 {
        income
    } else {
        FALLBACK_BALANCE
    }
}

/// The opening income transaction for a new profile, when the quiz
/// reported a positive monthly income.
pub fn initial_transaction(answers: &QuizAnswers) -> Option<Transaction> {
    let income = answers.income();
    if income <= 0.0 {
        return None;
    }
    info!(income, "seeding initial income transaction");
    Some(Transaction {
        description: "Monthly Income/Pocket Money".to_string(),
        amount: income,
        kind: TransactionKind::Income,
        date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        category: None,
    })
}
