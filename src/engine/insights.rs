use std::cmp::Ordering;

use crate::engine::challenges::challenge_score;
use crate::models::challenge::ChallengeRecord;
use crate::models::insight::{CashFlow, CategorySlice, GardenTip, TipIcon, TreeHealth};
use crate::models::transaction::{Transaction, TransactionKind};

/// Fallback for expenses without a category.
const UNCATEGORIZED_NAME: &str = "Other";
const UNCATEGORIZED_COLOR: &str = "#6b7280";

/// Lifetime income/expense aggregates.
pub fn cash_flow(transactions: &[Transaction]) -> CashFlow {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let total_expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    let net_savings = total_income - total_expenses;
    let savings_rate_pct = if total_income > 0.0 {
        net_savings / total_income * 100.0
    } else {
        0.0
    };

    CashFlow {
        total_income,
        total_expenses,
        net_savings,
        savings_rate_pct,
    }
}

/// Expense totals grouped by category, largest first.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();

    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        let (name, color) = match &t.category {
            Some(cat) => (cat.name.as_str(), cat.color.as_str()),
            None => (UNCATEGORIZED_NAME, UNCATEGORIZED_COLOR),
        };
        match slices.iter_mut().find(|s| s.name == name) {
            Some(slice) => slice.value += t.amount,
            None => slices.push(CategorySlice {
                name: name.to_string(),
                value: t.amount,
                color: color.to_string(),
            }),
        }
    }

    slices.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    slices
}

/// Compute the money-tree health model.
///
/// Roots follow challenge performance, the trunk follows the share of
/// income spent, and growth follows the savings rate. Goal progress is
/// measured against `total_savings` when the shell tracks it, falling
/// back to net savings otherwise. Fruits mark goal milestones (one per
/// 20%), pests accumulate from bad challenge choices.
pub fn tree_health(
    flow: &CashFlow,
    records: &[ChallengeRecord],
    savings_goal: f64,
    total_savings: f64,
) -> TreeHealth {
    let score = challenge_score(records);
    let roots = score.clamp(0.0, 100.0);

    let trunk_raw = if flow.total_expenses > 0.0 {
        let income = if flow.total_income > 0.0 {
            flow.total_income
        } else {
            1.0
        };
        (100.0 - flow.total_expenses / income * 80.0).max(20.0)
    } else {
        80.0
    };
    let trunk = trunk_raw.clamp(0.0, 100.0);

    let growth = (flow.savings_rate_pct * 2.0 + 30.0).clamp(0.0, 100.0);

    let savings = if total_savings > 0.0 {
        total_savings
    } else {
        flow.net_savings
    };
    let goal_progress_pct = if savings_goal > 0.0 {
        (savings / savings_goal * 100.0).min(100.0).max(0.0)
    } else {
        0.0
    };
    let fruits = ((goal_progress_pct / 20.0).floor() as usize).min(5);

    let bad_choices = records.iter().filter(|r| !r.is_good_choice).count();
    let pests = (bad_choices / 2).min(4);

    let overall = ((roots + trunk + growth) / 3.0).round();

    TreeHealth {
        roots,
        trunk,
        growth,
        goal_progress_pct,
        fruits,
        pests,
        overall,
    }
}

/// Personalized tips for the weakest parts of the tree. Always returns
/// at least one entry.
pub fn garden_tips(health: &TreeHealth) -> Vec<GardenTip> {
    let mut tips = Vec::new();

    if health.roots < 60.0 {
        tips.push(GardenTip {
            icon: TipIcon::Heart,
            text: "Water your roots! Make more mindful financial choices in daily challenges.",
            color: "#8b5cf6",
        });
    }
    if health.trunk < 60.0 {
        tips.push(GardenTip {
            icon: TipIcon::Droplets,
            text: "Your trunk needs attention. Try to reduce unnecessary spending to strengthen it.",
            color: "#22c55e",
        });
    }
    if health.growth < 50.0 {
        tips.push(GardenTip {
            icon: TipIcon::Sun,
            text: "Give your tree more sunlight! Increase your savings to help it grow taller.",
            color: "#eab308",
        });
    }
    if health.pests > 2 {
        tips.push(GardenTip {
            icon: TipIcon::Wind,
            text: "Blow away the pests! Avoid impulsive spending decisions.",
            color: "#f97316",
        });
    }
    if tips.is_empty() {
        tips.push(GardenTip {
            icon: TipIcon::Sparkles,
            text: "Your money tree is flourishing! Keep nurturing it with good habits.",
            color: "#22c55e",
        });
    }

    tips
}
