use serde::{Deserialize, Serialize};

/// One answer option for a behavioral scenario, with the insight text
/// shown after the choice is made.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub is_good: bool,
    pub insight: &'static str,
}

/// A daily behavioral challenge scenario.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scenario {
    pub scenario: &'static str,
    pub choices: &'static [Choice],
}

/// Result of evaluating a user's choice for a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    pub choice: String,
    pub is_good_choice: bool,
    pub insight: String,
}

/// A past challenge response, as stored by the shell. Only the flag
/// and date matter for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRecord {
    pub choice: String,
    pub is_good_choice: bool,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
}
