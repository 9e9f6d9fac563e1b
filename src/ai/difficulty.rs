use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::agent::Agent;
use super::minimax::{MinimaxAgent, SearchOptions};
use super::random::RandomAgent;

/// Strength tier of the computer opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Build the opponent for this tier. Beginner and Medium both play
    /// uniformly random legal columns; Hard searches with `search`.
    pub fn agent(self, search: SearchOptions, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            Difficulty::Beginner | Difficulty::Medium => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            Difficulty::Hard => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                Box::new(MinimaxAgent::with_options(search, rng))
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ConfigError::Validation(format!(
                "unknown difficulty '{other}' (expected beginner, medium or hard)"
            ))),
        }
    }
}
