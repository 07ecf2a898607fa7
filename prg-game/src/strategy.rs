use prg_core::RoundObservation;

/// Picks the answer submitted for a round. The tracker applies the strategy
/// once per peer (re)binding, so a session answers consistently.
pub trait AnswerStrategy: Send + Sync {
    fn choose(&self, observation: &RoundObservation) -> (i64, String);
}

/// Always answers the same option regardless of the clue.
#[derive(Debug, Clone)]
pub struct FixedAnswer {
    pub choice_idx: i64,
    pub choice: String,
}

impl Default for FixedAnswer {
    fn default() -> Self {
        Self {
            choice_idx: 0,
            choice: "Jalebi".to_string(),
        }
    }
}

impl AnswerStrategy for FixedAnswer {
    fn choose(&self, _observation: &RoundObservation) -> (i64, String) {
        (self.choice_idx, self.choice.clone())
    }
}
