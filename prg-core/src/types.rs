use serde::{Deserialize, Serialize};

/// Outcome of submitting one round of the PRG game, as reported by the
/// upstream driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Error,
    #[serde(rename = "No active game")]
    NoActiveGame,
    #[serde(rename = "Already answered")]
    AlreadyAnswered,
    Success,
}

/// One round result fed into the tracker. Ephemeral: consumed once, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundObservation {
    pub status: GameStatus,
    #[serde(default)]
    pub game_idx: u64,
    #[serde(default)]
    pub clue_idx: u64,
    /// Index of the chosen option; -1 means no valid choice was made.
    #[serde(default = "default_choice_idx")]
    pub choice_idx: i64,
    #[serde(default)]
    pub choice: String,
    #[serde(default)]
    pub rounds_remaining: u64,
}

fn default_choice_idx() -> i64 {
    -1
}

/// Token amount in base units (wei, 18 decimals).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    pub fn to_wei(self) -> u128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Evenly split across `parts`, rounding down. `parts` must be non-zero.
    pub fn split(self, parts: u64) -> Self {
        Self(self.0 / u128::from(parts.max(1)))
    }

    pub fn saturating_sub(self, other: TokenAmount) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Whole tokens as a float, for human-readable output only.
    pub fn to_tokens(self) -> f64 {
        self.0 as f64 / 1e18
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.to_tokens())
    }
}
