//! Per-peer PRG game tracking
//!
//! The tracker consumes round observations for a peer, places bets through
//! the coordinator, claims rewards for finished games exactly once, and
//! persists its cursors across restarts.

pub mod error;
pub mod strategy;
pub mod tracker;

pub use error::{GameError, Result};
pub use strategy::{AnswerStrategy, FixedAnswer};
pub use tracker::GameTracker;
