use crate::error::{GameError, Result};
use crate::strategy::AnswerStrategy;
use prg_core::{
    AuditLog, Coordinator, GameStatus, PeerGameState, RoundObservation, StateStore, TestOverrides,
    TokenAmount,
};
use std::sync::Arc;

struct BoundPeer {
    peer_id: String,
    state: PeerGameState,
    record: AuditLog,
}

/// Per-peer play/claim state machine.
///
/// Feed round observations in with [`observe`](Self::observe); the tracker
/// places bets through the coordinator, records history, claims finished
/// games and persists after every state-changing transition. Coordinator
/// failures never corrupt local bookkeeping: the history write is
/// unconditional and a failed claim leaves the claim cursor untouched so the
/// next observation retries it.
///
/// Observations for one peer must arrive strictly sequentially; the tracker
/// exclusively owns the bound peer's state file.
pub struct GameTracker {
    coordinator: Arc<dyn Coordinator>,
    store: StateStore,
    strategy: Box<dyn AnswerStrategy>,
    overrides: TestOverrides,
    bound: Option<BoundPeer>,
}

impl GameTracker {
    pub fn new(
        coordinator: Arc<dyn Coordinator>,
        store: StateStore,
        strategy: Box<dyn AnswerStrategy>,
        overrides: TestOverrides,
    ) -> Self {
        Self {
            coordinator,
            store,
            strategy,
            overrides,
            bound: None,
        }
    }

    pub fn peer_id(&self) -> Option<&str> {
        self.bound.as_ref().map(|b| b.peer_id.as_str())
    }

    pub fn state(&self) -> Option<&PeerGameState> {
        self.bound.as_ref().map(|b| &b.state)
    }

    /// Bind to `peer_id`, loading its persisted state. Returns `true` when
    /// this call actually rebound (first sight of the peer this session).
    pub async fn activate(&mut self, peer_id: &str) -> Result<bool> {
        if self.peer_id() == Some(peer_id) {
            return Ok(false);
        }
        let state = self.store.load(peer_id).await?;
        let record = AuditLog::new(self.store.record_path(peer_id));
        self.bound = Some(BoundPeer {
            peer_id: peer_id.to_string(),
            state,
            record,
        });
        Ok(true)
    }

    /// Process one round observation for a peer.
    ///
    /// Coordinator failures are swallowed here and surface only in logs;
    /// persistence failures propagate.
    pub async fn observe(&mut self, mut obs: RoundObservation, peer_id: &str) -> Result<()> {
        if self.activate(peer_id).await? {
            // The answer is fixed per session, bound at (re)activation.
            let (choice_idx, choice) = self.strategy.choose(&obs);
            obs.choice_idx = choice_idx;
            obs.choice = choice;
        }

        match obs.status {
            GameStatus::Success => self.on_success(&obs).await,
            GameStatus::NoActiveGame => self.on_game_over().await,
            GameStatus::AlreadyAnswered | GameStatus::Error => {
                tracing::debug!(
                    "Ignoring observation with status {:?} for peer {}",
                    obs.status,
                    peer_id
                );
                Ok(())
            }
        }
    }

    async fn on_success(&mut self, obs: &RoundObservation) -> Result<()> {
        if obs.choice_idx < 0 {
            tracing::debug!(
                "Observation for game {} carries no valid choice; ignoring",
                obs.game_idx
            );
            return Ok(());
        }

        let coordinator = Arc::clone(&self.coordinator);
        let bound = self
            .bound
            .as_mut()
            .ok_or_else(|| GameError::Internal("observe ran with no peer bound".to_string()))?;
        let game = obs.game_idx;

        if let Some(balance) = fetch_balance(&*coordinator, &self.overrides, &bound.peer_id).await
        {
            let rounds_remaining = obs.rounds_remaining.max(1);
            let mut bet = balance.split(rounds_remaining);
            if let Some(wei) = self.overrides.bet_amount {
                bet = TokenAmount::from_wei(wei);
            }
            let expected_remaining = balance.saturating_sub(bet);

            tracing::info!(
                "peer={} game={} clue={}: balance(before)={} tokens, rounds_remaining={}, \
                 calculated_bet={} tokens, expected_remaining={} tokens",
                bound.peer_id,
                game,
                obs.clue_idx,
                balance,
                rounds_remaining,
                bet,
                expected_remaining
            );

            if !bet.is_zero() {
                if let Err(e) = coordinator
                    .submit_guess(game, &bound.peer_id, obs.clue_idx, obs.choice_idx, bet)
                    .await
                {
                    tracing::debug!("Guess submission failed: {}", e);
                }

                // Best-effort re-read; the backend may not have settled yet.
                let token_after = match coordinator.balance(&bound.peer_id).await {
                    Ok(actual) => {
                        tracing::info!(
                            "peer={}: balance(after)={} tokens",
                            bound.peer_id,
                            actual
                        );
                        format!("{} tokens", actual)
                    }
                    Err(e) => {
                        tracing::debug!("Could not fetch balance after bet: {}", e);
                        "UNKNOWN".to_string()
                    }
                };

                bound
                    .record
                    .append(format!(
                        "Game {} Round {}: Peer {} token_before={} tokens, placed_bet={} tokens, \
                         token_after={}, choice={}",
                        game, obs.clue_idx, bound.peer_id, balance, bet, token_after, obs.choice
                    ))
                    .await;
            } else {
                tracing::info!("Bet amount is zero; no guess submitted");
                bound
                    .record
                    .append(format!(
                        "Game {} Round {}: Peer {} placed NO bet (bet_amt=0), choice={}",
                        game, obs.clue_idx, bound.peer_id, obs.choice
                    ))
                    .await;
            }
        }

        // Local bookkeeping never depends on coordinator success.
        bound.state.prg_history_dict.insert(game, obs.clue_idx);

        if let Some(previous) = bound.state.prg_last_game_played {
            if previous != game {
                match coordinator.claim(previous, &bound.peer_id).await {
                    Ok(()) => {
                        tracing::info!(
                            "successfully claimed reward for previous game {}",
                            previous
                        );
                        bound
                            .record
                            .append(format!(
                                "successfully claimed reward for previous game {}",
                                previous
                            ))
                            .await;
                        bound.state.prg_last_game_claimed = Some(previous);
                    }
                    Err(e) => {
                        // Cursor stays put; a later observation retries.
                        tracing::debug!("Claim for game {} failed: {}", previous, e);
                    }
                }
            }
        }

        bound.state.prg_last_game_played = Some(game);
        self.store.save(&bound.peer_id, &bound.state).await?;
        Ok(())
    }

    async fn on_game_over(&mut self) -> Result<()> {
        let coordinator = Arc::clone(&self.coordinator);
        let bound = self
            .bound
            .as_mut()
            .ok_or_else(|| GameError::Internal("observe ran with no peer bound".to_string()))?;

        let pending = match bound.state.pending_claim() {
            Some(game) => game,
            None => return Ok(()),
        };

        match coordinator.claim(pending, &bound.peer_id).await {
            Ok(()) => {
                tracing::info!("successfully claimed reward for previous game {}", pending);
                bound
                    .record
                    .append(format!(
                        "successfully claimed reward for previous game {}",
                        pending
                    ))
                    .await;
                bound.state.prg_last_game_claimed = Some(pending);
                bound.state.prg_last_game_played = None;
                self.store.save(&bound.peer_id, &bound.state).await?;
            }
            Err(e) => {
                tracing::debug!("Claim for game {} failed: {}", pending, e);
            }
        }
        Ok(())
    }
}

async fn fetch_balance(
    coordinator: &dyn Coordinator,
    overrides: &TestOverrides,
    peer_id: &str,
) -> Option<TokenAmount> {
    if let Some(wei) = overrides.token_balance {
        return Some(TokenAmount::from_wei(wei));
    }
    match coordinator.balance(peer_id).await {
        Ok(balance) => Some(balance),
        Err(e) => {
            tracing::debug!("Balance lookup failed for peer {}: {}", peer_id, e);
            None
        }
    }
}
