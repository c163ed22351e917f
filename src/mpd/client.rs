//! Polling client for an MPD-compatible player daemon.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::MpdConfig;
use crate::filename::sanitize_filename;
use crate::mpd::connection::Connection;
use crate::player::{Player, PlayerError, PlayerState};

/// Client holding a lazy, self-healing session to the daemon.
///
/// The session is established on first use and re-dialed transparently when
/// its liveness probe fails. A failed dial is returned to the caller, which
/// is expected to retry on its next poll tick; no retry loop runs here.
pub struct MpdClient {
    address: String,
    password: String,
    conn: Option<Connection>,
}

impl MpdClient {
    /// Create a client for the configured daemon. No connection is made
    /// until the first [`Player::state`] call.
    pub fn new(config: &MpdConfig) -> Self {
        Self {
            address: config.address.clone(),
            password: config.password.clone(),
            conn: None,
        }
    }

    /// Whether a session handle is currently held. The handle may still turn
    /// out to be stale; [`Player::state`] probes it before use.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Hand out a live session, probing any held handle first and dialing
    /// fresh when the probe fails or no handle exists.
    async fn ensure_connected(&mut self) -> Result<&mut Connection, PlayerError> {
        if let Some(mut conn) = self.conn.take() {
            if conn.ping().await.is_ok() {
                return Ok(self.conn.insert(conn));
            }
            // Dropping the stale handle here closes its socket before redialing.
            tracing::debug!(address = %self.address, "player session went stale, redialing");
        }
        let conn = Connection::open(&self.address, &self.password).await?;
        Ok(self.conn.insert(conn))
    }
}

#[async_trait]
impl Player for MpdClient {
    async fn state(&mut self) -> Result<PlayerState, PlayerError> {
        let conn = self.ensure_connected().await?;
        let status = conn.run("status").await?;
        let current = conn.run("currentsong").await?;
        Ok(compose_state(&status, &current))
    }
}

/// Build a state snapshot out of the daemon's `status` and `currentsong`
/// responses. Missing fields degrade to defaults, never to an error.
fn compose_state(
    status: &HashMap<String, String>,
    current: &HashMap<String, String>,
) -> PlayerState {
    let title = current.get("Title").cloned().unwrap_or_default();
    let artist = current.get("Artist").cloned().unwrap_or_default();
    let query = if artist.is_empty() {
        title
    } else {
        format!("{artist} - {title}")
    };

    PlayerState {
        id: status.get("songid").cloned().unwrap_or_default(),
        query: sanitize_filename(&query),
        playing: status.get("state").map(String::as_str) == Some("play"),
        position_ms: whole_seconds(status.get("elapsed")) * 1000,
    }
}

/// `elapsed` comes in with sub-second precision; keep only whole seconds.
/// Unparsable input degrades to zero.
fn whole_seconds(elapsed: Option<&String>) -> u64 {
    elapsed
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0) as u64
}
