//! PRG core - shared foundation for the peer betting-game tracker
//!
//! This library provides the coordinator client, per-peer persistence and
//! audit sinks used by the game state machine in `prg-game`.

pub mod audit;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod storage;
pub mod types;

pub use audit::AuditLog;
pub use config::{CoordinatorEndpoint, GameConfig, TestOverrides};
pub use coordinator::{Coordinator, HttpCoordinator};
pub use error::{PrgError, Result};
pub use storage::{PeerGameState, StateStore};
pub use types::{GameStatus, RoundObservation, TokenAmount};
