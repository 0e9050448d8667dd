use serde::{Deserialize, Serialize};

/// Financial personality archetype assigned by the onboarding quiz.
/// Serialized with its display label, which is what the shell persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Personality {
    #[serde(rename = "The Saver")]
    Saver,
    #[serde(rename = "The Planner")]
    Planner,
    #[serde(rename = "The Explorer")]
    Explorer,
    #[serde(rename = "The Spontaneous")]
    Spontaneous,
}

impl Personality {
    pub fn label(&self) -> &'static str {
        match self {
            Personality::Saver => "The Saver",
            Personality::Planner => "The Planner",
            Personality::Explorer => "The Explorer",
            Personality::Spontaneous => "The Spontaneous",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Personality::Saver => {
                "You're naturally inclined to save! You think before you spend and always have a cushion for emergencies."
            }
            Personality::Planner => {
                "You love having a plan! Budgets and tracking come naturally to you."
            }
            Personality::Explorer => {
                "You're learning and growing! Every financial decision is a chance to improve."
            }
            Personality::Spontaneous => {
                "You live in the moment! Learning to balance spontaneity with planning will serve you well."
            }
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            Personality::Saver => {
                "Keep up the great work! Consider learning about investments to make your money grow."
            }
            Personality::Planner => {
                "Your planning skills are valuable. Try setting stretch goals to challenge yourself!"
            }
            Personality::Explorer => {
                "Start with small habits - track one expense category this week!"
            }
            Personality::Spontaneous => {
                "Try the 24-hour rule: wait a day before making non-essential purchases."
            }
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "The Saver" => Ok(Personality::Saver),
            "The Planner" => Ok(Personality::Planner),
            "The Explorer" => Ok(Personality::Explorer),
            "The Spontaneous" => Ok(Personality::Spontaneous),
            _ => Err(format!("Unknown personality: {}", s)),
        }
    }
}
