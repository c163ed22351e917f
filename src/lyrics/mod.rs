// lyrics/mod.rs - top-level lyrics module re-exporting submodules

use async_trait::async_trait;

pub mod parse;
pub mod providers;
pub mod types;

pub use providers::LocalProvider;
pub use types::{LyricLine, LyricsError};

/// Capability contract for resolving a track query to timestamped lyric
/// lines, consumed by the external sync engine.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Resolve `query` to parsed lyric lines. `id` is a player-assigned
    /// track identifier that some backends key on; the local backend matches
    /// on `query` alone. `Ok(None)` means no match, which is not an error.
    async fn lyrics(
        &self,
        id: &str,
        query: &str,
    ) -> Result<Option<Vec<LyricLine>>, LyricsError>;
}
