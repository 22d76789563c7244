//! Error types
//!
//! The per-frame simulation is infallible. Only tuning data and the
//! game lifecycle calls can fail.

use thiserror::Error;

use crate::sim::Phase;

#[derive(Debug, Error)]
pub enum GameError {
    /// Tuning JSON could not be parsed
    #[error("failed to parse tuning: {0}")]
    Tuning(#[from] serde_json::Error),

    /// Tuning parsed but describes an unplayable game
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// `start()` is only valid while assets are loading
    #[error("game can only start from Loading (current phase: {0:?})")]
    NotLoading(Phase),
}
