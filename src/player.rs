// player.rs - the capability contract the sync engine polls

use async_trait::async_trait;
use thiserror::Error;

/// A single observation of the player daemon's status. Built fresh on every
/// poll and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Opaque player-assigned track identifier (may be empty).
    pub id: String,
    /// Normalized lookup query, `"<artist> - <title>"` or just the title
    /// (may be empty).
    pub query: String,
    /// Whether the player is currently playing (as opposed to paused or
    /// stopped).
    pub playing: bool,
    /// Elapsed position in milliseconds. The daemon reports sub-second
    /// precision but the value is truncated to whole seconds before scaling,
    /// so it can lag the true position by up to 999 ms.
    pub position_ms: u64,
}

/// Errors from observing the player daemon
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Capability contract for observing a music player's playback state.
///
/// `state` takes `&mut self`: the connection handle behind an implementation
/// is owned by one caller at a time and is not protected against overlapping
/// calls.
#[async_trait]
pub trait Player: Send {
    /// Take a fresh snapshot of the player's state.
    async fn state(&mut self) -> Result<PlayerState, PlayerError>;
}
