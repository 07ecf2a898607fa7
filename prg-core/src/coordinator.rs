use crate::config::CoordinatorEndpoint;
use crate::error::{PrgError, Result};
use crate::types::TokenAmount;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// External authority for balances, guesses and claims.
///
/// All three calls may fail transiently; callers decide whether a failure is
/// recoverable. Implementations own their own timeout/retry policy.
#[async_trait]
pub trait Coordinator: Send + Sync {
    /// Current bet-token balance of a peer, in wei.
    async fn balance(&self, peer_id: &str) -> Result<TokenAmount>;

    /// Submit a guess for one round of a game, wagering `amount`.
    async fn submit_guess(
        &self,
        game_idx: u64,
        peer_id: &str,
        clue_idx: u64,
        choice_idx: i64,
        amount: TokenAmount,
    ) -> Result<()>;

    /// Claim the reward for a finished game. Safe to retry; the coordinator
    /// rejects double claims.
    async fn claim(&self, game_idx: u64, peer_id: &str) -> Result<()>;
}

#[derive(Serialize)]
struct BalanceRequest<'a> {
    org_id: &'a str,
    peer_id: &'a str,
}

#[derive(Deserialize)]
struct BalanceResponse {
    /// Wei amount as a decimal string; wei balances overflow JSON numbers.
    balance: String,
}

#[derive(Serialize)]
struct GuessRequest<'a> {
    org_id: &'a str,
    peer_id: &'a str,
    game_idx: u64,
    clue_idx: u64,
    choice_idx: i64,
    amount: String,
}

#[derive(Serialize)]
struct ClaimRequest<'a> {
    org_id: &'a str,
    peer_id: &'a str,
    game_idx: u64,
}

/// Coordinator client talking JSON over HTTP to the game proxy.
pub struct HttpCoordinator {
    client: reqwest::Client,
    endpoint: CoordinatorEndpoint,
}

impl HttpCoordinator {
    pub fn new(endpoint: CoordinatorEndpoint) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    fn route(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Coordinator for HttpCoordinator {
    async fn balance(&self, peer_id: &str) -> Result<TokenAmount> {
        let response = self
            .client
            .post(self.route("balance"))
            .json(&BalanceRequest {
                org_id: &self.endpoint.org_id,
                peer_id,
            })
            .send()
            .await?
            .error_for_status()?;

        let body: BalanceResponse = response.json().await?;
        let wei: u128 = body
            .balance
            .parse()
            .map_err(|_| PrgError::coordinator(format!("unparseable balance: {}", body.balance)))?;
        Ok(TokenAmount::from_wei(wei))
    }

    async fn submit_guess(
        &self,
        game_idx: u64,
        peer_id: &str,
        clue_idx: u64,
        choice_idx: i64,
        amount: TokenAmount,
    ) -> Result<()> {
        self.client
            .post(self.route("guess"))
            .json(&GuessRequest {
                org_id: &self.endpoint.org_id,
                peer_id,
                game_idx,
                clue_idx,
                choice_idx,
                amount: amount.to_wei().to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn claim(&self, game_idx: u64, peer_id: &str) -> Result<()> {
        self.client
            .post(self.route("claim"))
            .json(&ClaimRequest {
                org_id: &self.endpoint.org_id,
                peer_id,
                game_idx,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
