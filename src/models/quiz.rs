use serde::{Deserialize, Serialize};

/// What the user does first when money comes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingHabit {
    SaveFirst,
    Budget,
    Spend,
    Mixed,
}

/// How the user feels about tracking expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingAttitude {
    LoveIt,
    Sometimes,
    WantTo,
    NotInterested,
}

/// What the user is saving toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Phone,
    Education,
    Travel,
    Emergency,
    Investment,
    Other,
}

/// The complete answer set for the five-question onboarding quiz.
/// Numeric answers arrive as raw input strings; malformed or empty
/// values parse soft to 0 rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub monthly_income: String,
    pub goal_type: GoalType,
    pub savings_goal: String,
    pub spending_habit: SpendingHabit,
    pub tracking_attitude: TrackingAttitude,
}

impl QuizAnswers {
    /// Monthly income as a number, 0 if unparseable.
    pub fn income(&self) -> f64 {
        parse_amount(&self.monthly_income)
    }

    /// Monthly savings target as a number, 0 if unparseable.
    pub fn goal(&self) -> f64 {
        parse_amount(&self.savings_goal)
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Rendering hint for a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free numeric input (dollar amount).
    Amount,
    /// Pick one of a fixed set of (value, label) options.
    Choice(&'static [(&'static str, &'static str)]),
}

/// One question of the onboarding quiz.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    /// Answer field this question fills in.
    pub field: &'static str,
    pub kind: QuestionKind,
}

/// The fixed five-question quiz, in presentation order.
pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "How much is your monthly income/pocket money?",
        field: "monthly_income",
        kind: QuestionKind::Amount,
    },
    QuizQuestion {
        prompt: "What's your main savings goal?",
        field: "goal_type",
        kind: QuestionKind::Choice(&[
            ("phone", "New Phone/Gadget"),
            ("education", "Education/Courses"),
            ("travel", "Travel/Experiences"),
            ("emergency", "Emergency Fund"),
            ("investment", "Start Investing"),
            ("other", "Other"),
        ]),
    },
    QuizQuestion {
        prompt: "How much do you want to save each month?",
        field: "savings_goal",
        kind: QuestionKind::Amount,
    },
    QuizQuestion {
        prompt: "When you get money, what do you usually do first?",
        field: "spending_habit",
        kind: QuestionKind::Choice(&[
            ("save_first", "Save some immediately"),
            ("budget", "Plan how to spend it"),
            ("spend", "Spend on something I want"),
            ("mixed", "Depends on my mood"),
        ]),
    },
    QuizQuestion {
        prompt: "How do you feel about tracking your expenses?",
        field: "tracking_attitude",
        kind: QuestionKind::Choice(&[
            ("love_it", "I love tracking everything!"),
            ("sometimes", "I do it sometimes"),
            ("want_to", "I want to start"),
            ("not_interested", "Not really my thing"),
        ]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_numeric_parsing() {
        let answers = QuizAnswers {
            monthly_income: "  250.50 ".to_string(),
            goal_type: GoalType::Phone,
            savings_goal: "not a number".to_string(),
            spending_habit: SpendingHabit::Mixed,
            tracking_attitude: TrackingAttitude::Sometimes,
        };
        assert!((answers.income() - 250.5).abs() < 1e-10);
        assert_eq!(answers.goal(), 0.0);
    }

    #[test]
    fn test_habit_wire_format() {
        let habit: SpendingHabit = serde_json::from_str("\"save_first\"").unwrap();
        assert_eq!(habit, SpendingHabit::SaveFirst);
        let attitude: TrackingAttitude = serde_json::from_str("\"not_interested\"").unwrap();
        assert_eq!(attitude, TrackingAttitude::NotInterested);
    }

    #[test]
    fn test_quiz_has_five_questions() {
        assert_eq!(QUESTIONS.len(), 5);
        assert_eq!(QUESTIONS[0].field, "monthly_income");
        assert_eq!(QUESTIONS[4].field, "tracking_attitude");
    }
}
