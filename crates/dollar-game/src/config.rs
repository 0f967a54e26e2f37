use dollar_core::codes;
use dollar_core::errors::{config_error, DollarError};
use dollar_core::rng::RngHandle;
use dollar_sample::SamplingStrategy;
use serde::{Deserialize, Serialize};

/// How far the total balance sits from the genus when a puzzle is
/// randomized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Two dollars above the genus.
    VeryEasy,
    /// One dollar above the genus.
    Easy,
    /// Exactly the genus.
    #[default]
    Challenging,
    /// One dollar below the genus; some layouts have no solution.
    NotAlwaysPossible,
    /// Arbitrary offset from the genus.
    Custom(i64),
}

impl Difficulty {
    /// Offset added to the genus to obtain the target total.
    pub const fn offset(&self) -> i64 {
        match self {
            Difficulty::VeryEasy => 2,
            Difficulty::Easy => 1,
            Difficulty::Challenging => 0,
            Difficulty::NotAlwaysPossible => -1,
            Difficulty::Custom(offset) => *offset,
        }
    }
}

/// Parameters for [`crate::Puzzle::randomize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Smallest balance a node may receive.
    #[serde(default = "default_floor")]
    pub floor: i32,
    /// Largest balance a node may receive.
    #[serde(default = "default_ceiling")]
    pub ceiling: i32,
    /// Offset of the total from the genus.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Sampler used to draw balances.
    #[serde(default)]
    pub strategy: SamplingStrategy,
    /// Master seed; `None` draws from operating system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_floor() -> i32 {
    -5
}

fn default_ceiling() -> i32 {
    5
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            ceiling: default_ceiling(),
            difficulty: Difficulty::default(),
            strategy: SamplingStrategy::default(),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DollarError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| config_error(codes::INVALID_CONFIG, err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the configuration into indented JSON.
    pub fn to_json(&self) -> Result<String, DollarError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| config_error(codes::INVALID_CONFIG, err.to_string()))
    }

    /// Checks that the balance range is not empty.
    pub fn validate(&self) -> Result<(), DollarError> {
        if self.floor > self.ceiling {
            return Err(
                config_error(codes::INVALID_CONFIG, "floor must not exceed ceiling")
                    .with_context("floor", self.floor)
                    .with_context("ceiling", self.ceiling),
            );
        }
        Ok(())
    }

    /// Builds the RNG described by `seed`.
    pub fn rng(&self) -> RngHandle {
        match self.seed {
            Some(seed) => RngHandle::from_seed(seed),
            None => RngHandle::from_entropy(),
        }
    }
}
