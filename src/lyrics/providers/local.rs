//! Local lyrics backend: an in-memory index over a directory of `.lrc` files.
//!
//! The directory is walked once at construction; lookups scan the index for a
//! filename that exactly equals the query (extension stripped) and parse the
//! matching file on every call. Every lookup also appends one line to a
//! diagnostic sink, so mismatched queries can be diagnosed after the fact.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::config::LocalConfig;
use crate::lyrics::parse::parse_lyric_file;
use crate::lyrics::types::{LyricLine, LyricsError};
use crate::lyrics::LyricsProvider;

/// Recognized lyric-file suffix.
const LYRIC_EXT: &str = ".lrc";

/// One discovered lyric file.
struct IndexEntry {
    path: PathBuf,
}

impl IndexEntry {
    /// Final path component with the lyric-file extension stripped; this is
    /// the string queries are compared against, byte for byte.
    fn stem(&self) -> Option<&str> {
        self.path.file_name()?.to_str()?.strip_suffix(LYRIC_EXT)
    }
}

/// Lyrics backend over a local directory of `.lrc` files.
pub struct LocalProvider {
    index: Vec<IndexEntry>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for LocalProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalProvider")
            .field("entries", &self.index.len())
            .finish_non_exhaustive()
    }
}

impl LocalProvider {
    /// Build the index under `config.folder` and log lookups to
    /// `<cache_dir>/lyricsmpd/local_provider.log`. If the log file cannot be
    /// opened the diagnostics are discarded; that is never an error.
    pub fn new(config: &LocalConfig) -> Result<Self, LyricsError> {
        Self::with_sink(config, default_sink())
    }

    /// Like [`LocalProvider::new`], but appending lookup diagnostics to the
    /// given sink instead of the default log file.
    pub fn with_sink(
        config: &LocalConfig,
        sink: Box<dyn Write + Send>,
    ) -> Result<Self, LyricsError> {
        let index = build_index(&config.folder)?;
        tracing::debug!(
            entries = index.len(),
            folder = %config.folder,
            "built local lyrics index"
        );
        Ok(Self {
            index,
            sink: Mutex::new(sink),
        })
    }

    /// Append one line to the diagnostic sink. Sink failures are ignored.
    fn note(&self, entry: std::fmt::Arguments) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_fmt(entry);
        }
    }
}

#[async_trait]
impl LyricsProvider for LocalProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn lyrics(
        &self,
        _id: &str,
        query: &str,
    ) -> Result<Option<Vec<LyricLine>>, LyricsError> {
        for entry in &self.index {
            if entry.stem() == Some(query) {
                self.note(format_args!("Exact match found: {}\n", entry.path.display()));

                // Read errors after a match are the caller's problem; bad
                // UTF-8 inside the file is not and decodes lossily.
                let raw = fs::read(&entry.path)?;
                return Ok(Some(parse_lyric_file(&String::from_utf8_lossy(&raw))));
            }
        }

        self.note(format_args!("No match found for: {:?}\n", query));
        Ok(None)
    }
}

/// Recursively enumerate every `.lrc` file under `folder`. Any entry that
/// cannot be read or stat'd aborts the build; an empty directory is fine and
/// yields an empty index.
fn build_index(folder: &str) -> Result<Vec<IndexEntry>, LyricsError> {
    let root = expand_home(folder);

    let mut index = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(LYRIC_EXT) {
            index.push(IndexEntry {
                path: entry.into_path(),
            });
        }
    }
    Ok(index)
}

/// Expand a leading `~/` against the current user's home directory.
fn expand_home(folder: &str) -> PathBuf {
    if let Some(rest) = folder.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(folder)
}

/// Append target for lookup diagnostics, discarded when the cache directory
/// or log file is unavailable.
fn default_sink() -> Box<dyn Write + Send> {
    let Some(cache) = dirs::cache_dir() else {
        return Box::new(io::sink());
    };
    let dir = cache.join("lyricsmpd");
    if fs::create_dir_all(&dir).is_err() {
        return Box::new(io::sink());
    }
    match fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("local_provider.log"))
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    }
}
