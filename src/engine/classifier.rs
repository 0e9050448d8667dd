use tracing::debug;

use crate::models::personality::Personality;
use crate::models::quiz::{QuizAnswers, SpendingHabit, TrackingAttitude};

/// Assign a financial personality from the quiz answers.
///
/// Two running scores are accumulated: a saving score from spending
/// habits and the savings-to-income ratio, and a planning score from
/// tracking attitude. The first matching rule wins: both scores >= 2
/// make a Saver, planning >= 2 alone a Planner, either score >= 1 an
/// Explorer, anything else Spontaneous.
pub fn classify(answers: &QuizAnswers) -> Personality {
    let mut save_score = 0.0f64;
    let mut plan_score = 0.0f64;

    match answers.spending_habit {
        SpendingHabit::SaveFirst => save_score += 2.0,
        SpendingHabit::Budget => plan_score += 2.0,
        SpendingHabit::Spend => save_score -= 1.0,
        SpendingHabit::Mixed => {}
    }

    match answers.tracking_attitude {
        TrackingAttitude::LoveIt => plan_score += 2.0,
        TrackingAttitude::Sometimes => plan_score += 1.0,
        TrackingAttitude::WantTo => plan_score += 0.5,
        TrackingAttitude::NotInterested => {}
    }

    // Saving at least 20% of income counts toward the saving score.
    let income = answers.income();
    let goal = answers.goal();
    if income > 0.0 && goal / income >= 0.2 {
        save_score += 1.0;
    }

    let personality = if save_score >= 2.0 && plan_score >= 2.0 {
        Personality::Saver
    } else if plan_score >= 2.0 {
        Personality::Planner
    } else if save_score >= 1.0 || plan_score >= 1.0 {
        Personality::Explorer
    } else {
        Personality::Spontaneous
    };

    debug!(
        save_score,
        plan_score,
        personality = personality.label(),
        "quiz classified"
    );
    personality
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::GoalType;

    fn answers(
        income: &str,
        goal: &str,
        habit: SpendingHabit,
        attitude: TrackingAttitude,
    ) -> QuizAnswers {
        QuizAnswers {
            monthly_income: income.to_string(),
            goal_type: GoalType::Other,
            savings_goal: goal.to_string(),
            spending_habit: habit,
            tracking_attitude: attitude,
        }
    }

    #[test]
    fn test_budget_tracker_with_high_ratio_is_saver() {
        // saveScore = 1 (300/1000 >= 0.2), planScore = 2 + 2 = 4
        let a = answers("1000", "300", SpendingHabit::Budget, TrackingAttitude::LoveIt);
        assert_eq!(classify(&a), Personality::Saver);
    }

    #[test]
    fn test_spender_with_no_income_is_spontaneous() {
        // saveScore = -1, planScore = 0
        let a = answers("0", "0", SpendingHabit::Spend, TrackingAttitude::NotInterested);
        assert_eq!(classify(&a), Personality::Spontaneous);
    }

    #[test]
    fn test_casual_tracker_is_explorer() {
        // saveScore = 0 (50/500 < 0.2), planScore = 1
        let a = answers("500", "50", SpendingHabit::Mixed, TrackingAttitude::Sometimes);
        assert_eq!(classify(&a), Personality::Explorer);
    }

    #[test]
    fn test_planner_without_saving_habit() {
        // saveScore = 0, planScore = 2
        let a = answers("0", "0", SpendingHabit::Mixed, TrackingAttitude::LoveIt);
        assert_eq!(classify(&a), Personality::Planner);
    }

    #[test]
    fn test_save_first_alone_is_explorer() {
        // saveScore = 2 but planScore = 0, so rule 1 and 2 both miss
        let a = answers("0", "0", SpendingHabit::SaveFirst, TrackingAttitude::NotInterested);
        assert_eq!(classify(&a), Personality::Explorer);
    }

    #[test]
    fn test_ratio_boundary_is_inclusive() {
        // Exactly 20% counts: saveScore = 2 + 1, planScore = 2
        let a = answers("1000", "200", SpendingHabit::SaveFirst, TrackingAttitude::LoveIt);
        assert_eq!(classify(&a), Personality::Saver);
    }

    #[test]
    fn test_malformed_numbers_parse_as_zero() {
        let a = answers("lots", "???", SpendingHabit::Spend, TrackingAttitude::NotInterested);
        assert_eq!(classify(&a), Personality::Spontaneous);
    }

    #[test]
    fn test_deterministic() {
        let a = answers("750", "150", SpendingHabit::Budget, TrackingAttitude::WantTo);
        assert_eq!(classify(&a), classify(&a));
    }
}
