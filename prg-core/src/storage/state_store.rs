use crate::error::{PrgError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable per-peer game record. Field names are the on-disk JSON keys;
/// history keys are game ids, serialized as string object keys and decoded
/// back to integers on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerGameState {
    #[serde(default)]
    pub prg_history_dict: BTreeMap<u64, u64>,
    #[serde(default)]
    pub prg_last_game_claimed: Option<u64>,
    #[serde(default)]
    pub prg_last_game_played: Option<u64>,
}

impl PeerGameState {
    /// The game awaiting a claim, if any. At most one game is ever pending.
    pub fn pending_claim(&self) -> Option<u64> {
        match self.prg_last_game_played {
            Some(game) if self.prg_last_game_claimed != Some(game) => Some(game),
            _ => None,
        }
    }
}

/// One JSON state file and one text record file per peer, both under a
/// configured log directory. Single writer per peer is assumed.
pub struct StateStore {
    log_dir: PathBuf,
}

impl StateStore {
    pub async fn new(log_dir: impl Into<PathBuf>) -> Result<Self> {
        let log_dir = log_dir.into();
        tokio::fs::create_dir_all(&log_dir)
            .await
            .map_err(|e| PrgError::internal(format!("Failed to create log directory: {}", e)))?;
        Ok(Self { log_dir })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn state_path(&self, peer_id: &str) -> PathBuf {
        self.log_dir.join(format!("prg_state_{}.json", peer_id))
    }

    pub fn record_path(&self, peer_id: &str) -> PathBuf {
        self.log_dir.join(format!("prg_record_{}.txt", peer_id))
    }

    /// Load a peer's state, or an empty default if the peer has never been
    /// persisted. A file that exists but does not decode is a hard error.
    pub async fn load(&self, peer_id: &str) -> Result<PeerGameState> {
        let path = self.state_path(peer_id);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PeerGameState::default());
            }
            Err(e) => return Err(e.into()),
        };

        let state: PeerGameState = serde_json::from_slice(&raw)
            .map_err(|e| PrgError::corrupt_state(path.display().to_string(), e.to_string()))?;

        if let Some(claimed) = state.prg_last_game_claimed {
            if !state.prg_history_dict.contains_key(&claimed) {
                return Err(PrgError::corrupt_state(
                    path.display().to_string(),
                    format!("claimed game {} absent from history", claimed),
                ));
            }
        }

        tracing::info!(
            "Loaded PRG state for peer {}: last game claimed - {:?}, last game played - {:?}",
            peer_id,
            state.prg_last_game_claimed,
            state.prg_last_game_played
        );
        Ok(state)
    }

    /// Full-state overwrite of the peer's file.
    pub async fn save(&self, peer_id: &str, state: &PeerGameState) -> Result<()> {
        let raw = serde_json::to_vec(state)?;
        tokio::fs::write(self.state_path(peer_id), raw).await?;
        Ok(())
    }
}
