//! Backend adapters for a time-synchronized lyrics display.
//!
//! Two capabilities are exposed to the sync engine that drives them:
//! [`LyricsProvider`], resolving a track query to timestamped lyric lines
//! (implemented here by [`LocalProvider`] over a directory of `.lrc` files),
//! and [`Player`], observing a music player daemon's playback state
//! (implemented here by [`MpdClient`] over the MPD wire protocol).

pub mod config;
pub mod filename;
pub mod lyrics;
pub mod mpd;
pub mod player;

pub use config::{LocalConfig, MpdConfig};
pub use filename::sanitize_filename;
pub use lyrics::{LocalProvider, LyricLine, LyricsError, LyricsProvider};
pub use mpd::MpdClient;
pub use player::{Player, PlayerError, PlayerState};
