// config.rs - configuration surface for the backends
//
// Loading these from a file is the host application's job; the structs are
// serde-ready so they can be embedded in whatever config format it uses.

use serde::{Deserialize, Serialize};

/// Where the local lyrics backend looks for `.lrc` files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Root directory of the lyric files. A leading `~/` is expanded against
    /// the current user's home directory.
    pub folder: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            folder: "~/lyrics".to_string(),
        }
    }
}

/// How to reach the player daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MpdConfig {
    /// `host:port` of the daemon.
    pub address: String,
    /// Connection password; an empty string skips authentication.
    pub password: String,
}

impl Default for MpdConfig {
    fn default() -> Self {
        Self {
            address: "localhost:6600".to_string(),
            password: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let local = LocalConfig::default();
        assert_eq!(local.folder, "~/lyrics");

        let mpd = MpdConfig::default();
        assert_eq!(mpd.address, "localhost:6600");
        assert!(mpd.password.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mpd: MpdConfig = serde_json::from_str(r#"{"address":"10.0.0.2:6600"}"#).unwrap();
        assert_eq!(mpd.address, "10.0.0.2:6600");
        assert!(mpd.password.is_empty());

        let local: LocalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(local.folder, "~/lyrics");
    }
}
