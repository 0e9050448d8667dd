use rand::Rng;

use crate::errors::AppError;
use crate::models::challenge::{ChallengeOutcome, ChallengeRecord, Choice, Scenario};

/// The fixed pool of daily behavioral scenarios.
pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        scenario: "Your favorite game just went on sale for $20. Your friend says you should buy it now. What do you do?",
        choices: &[
            Choice {
                value: "buy",
                label: "Buy it immediately",
                is_good: false,
                insight: "Impulse buying can quickly drain your savings. Try the 24-hour rule next time!",
            },
            Choice {
                value: "wait",
                label: "Wait and think about it for a day",
                is_good: true,
                insight: "Great choice! The 24-hour rule helps you make better spending decisions.",
            },
            Choice {
                value: "budget",
                label: "Check if you've budgeted for it",
                is_good: true,
                insight: "Smart thinking! Checking your budget first shows excellent financial awareness.",
            },
        ],
    },
    Scenario {
        scenario: "You receive $50 as a birthday gift. How do you handle it?",
        choices: &[
            Choice {
                value: "spend",
                label: "Spend it all on something fun",
                is_good: false,
                insight: "While it's okay to treat yourself, consider saving at least a portion of gifts.",
            },
            Choice {
                value: "split",
                label: "Save half, spend half",
                is_good: true,
                insight: "The 50/50 rule is a balanced approach to handling unexpected money!",
            },
            Choice {
                value: "save",
                label: "Save all of it",
                is_good: true,
                insight: "Excellent discipline! Saving unexpected money accelerates your financial goals.",
            },
        ],
    },
    Scenario {
        scenario: "Your phone screen cracked slightly but still works. A new phone costs $300. What's your move?",
        choices: &[
            Choice {
                value: "new",
                label: "Buy a new phone right away",
                is_good: false,
                insight: "Consider if you really need a new phone or if a repair would work just fine.",
            },
            Choice {
                value: "repair",
                label: "Get the screen repaired for $50",
                is_good: true,
                insight: "Smart choice! Repairs are often much cheaper than replacements.",
            },
            Choice {
                value: "wait",
                label: "Use it as is and save for later",
                is_good: true,
                insight: "Great patience! Using what you have while saving is financially wise.",
            },
        ],
    },
    Scenario {
        scenario: "Your friends want to eat out, but you've already spent your entertainment budget this month.",
        choices: &[
            Choice {
                value: "go",
                label: "Go anyway, it's just once",
                is_good: false,
                insight: "Peer pressure can hurt your budget. It's okay to say no sometimes.",
            },
            Choice {
                value: "alternative",
                label: "Suggest a cheaper alternative",
                is_good: true,
                insight: "Proposing alternatives shows leadership and financial awareness!",
            },
            Choice {
                value: "skip",
                label: "Be honest and skip this one",
                is_good: true,
                insight: "Sticking to your budget takes courage. Your future self will thank you!",
            },
        ],
    },
    Scenario {
        scenario: "You found a $10 bill on the ground at school with no one around.",
        choices: &[
            Choice {
                value: "keep",
                label: "Keep it and spend it",
                is_good: false,
                insight: "Consider the golden rule - how would you feel if you lost $10?",
            },
            Choice {
                value: "lost",
                label: "Turn it in to lost and found",
                is_good: true,
                insight: "Honesty is always the best policy! Good character leads to good finances.",
            },
            Choice {
                value: "donate",
                label: "Keep it but donate to charity",
                is_good: true,
                insight: "Turning something uncertain into something good shows great character!",
            },
        ],
    },
];

/// Pick today's scenario uniformly at random. The shell stores one
/// answered challenge per calendar day, so this is only called when no
/// record exists for today.
pub fn pick_daily<R: Rng>(rng: &mut R) -> &'static Scenario {
    &SCENARIOS[rng.gen_range(0..SCENARIOS.len())]
}

/// Resolve a chosen answer to its good/bad flag and insight text.
pub fn evaluate(scenario: &Scenario, choice_value: &str) -> Result<ChallengeOutcome, AppError> {
    let choice = scenario
        .choices
        .iter()
        .find(|c| c.value == choice_value)
        .ok_or_else(|| {
            AppError::Validation(format!("Unknown choice '{}' for scenario", choice_value))
        })?;

    Ok(ChallengeOutcome {
        choice: choice.value.to_string(),
        is_good_choice: choice.is_good,
        insight: choice.insight.to_string(),
    })
}

/// Share of good choices across the challenge history, as a percent.
/// A user with no history starts at a neutral 50.
pub fn challenge_score(records: &[ChallengeRecord]) -> f64 {
    if records.is_empty() {
        return 50.0;
    }
    let good = records.iter().filter(|r| r.is_good_choice).count();
    good as f64 / records.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(is_good: bool) -> ChallengeRecord {
        ChallengeRecord {
            choice: "wait".to_string(),
            is_good_choice: is_good,
            date: "2025-06-01".to_string(),
        }
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(SCENARIOS.len(), 5);
        for scenario in SCENARIOS {
            assert_eq!(scenario.choices.len(), 3);
            // Every scenario has at least one good and one bad path.
            assert!(scenario.choices.iter().any(|c| c.is_good));
            assert!(scenario.choices.iter().any(|c| !c.is_good));
        }
    }

    #[test]
    fn test_pick_daily_returns_catalog_entry() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20 {
            let picked = pick_daily(&mut rng);
            assert!(SCENARIOS
                .iter()
                .any(|s| std::ptr::eq(s.scenario, picked.scenario)));
        }
    }

    #[test]
    fn test_evaluate_good_and_bad_choices() {
        let scenario = &SCENARIOS[0];
        let good = evaluate(scenario, "wait").unwrap();
        assert!(good.is_good_choice);
        assert!(good.insight.contains("24-hour rule"));

        let bad = evaluate(scenario, "buy").unwrap();
        assert!(!bad.is_good_choice);
    }

    #[test]
    fn test_evaluate_unknown_choice() {
        let scenario = &SCENARIOS[1];
        assert!(matches!(
            evaluate(scenario, "yolo"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_challenge_score() {
        assert_eq!(challenge_score(&[]), 50.0);
        let records = vec![record(true), record(true), record(false), record(true)];
        assert!((challenge_score(&records) - 75.0).abs() < 1e-10);
        let all_bad = vec![record(false), record(false)];
        assert_eq!(challenge_score(&all_bad), 0.0);
    }
}
