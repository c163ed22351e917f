use thiserror::Error;

/// A single timestamped lyric line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricLine {
    /// Milliseconds from track start.
    pub time_ms: u64,
    /// Sung text, verbatim from the file (may be empty).
    pub text: String,
}

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
