//! Configuration for buzzer-core
//!
//! Minimal bootstrap configuration in the two-tier philosophy: the bootstrap
//! collaborator reads a TOML fragment and hands the typed [`Config`] to this
//! crate. Built-in defaults are defined in code, so an empty fragment (or
//! `Config::default()`) yields a working appliance.
//!
//! There is deliberately no environment or command-line handling here; that
//! surface belongs to the bootstrap layer.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::engine::DEFAULT_VOLUME;
use crate::error::{Error, Result};

/// Bootstrap configuration for the buzzer control core
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Device name used in the device-scoped command topic
    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// Mount point of the removable storage
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,

    /// Volume applied when a command omits the `volume` field
    #[serde(default = "default_volume")]
    pub default_volume: u8,

    /// Bound on the engine quiescence wait, in milliseconds.
    ///
    /// `0` means wait forever. A wedged engine then stalls all command
    /// processing indefinitely, so the built-in default is bounded.
    #[serde(default = "default_quiesce_timeout_ms")]
    pub quiesce_timeout_ms: u64,
}

fn default_device_name() -> String {
    "buzzer".to_string()
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("/sdcard")
}

fn default_volume() -> u8 {
    DEFAULT_VOLUME
}

fn default_quiesce_timeout_ms() -> u64 {
    10_000
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(format!("failed to parse TOML: {}", e)))
    }

    /// Quiescence wait bound as a `Duration`; `None` waits forever.
    pub fn quiesce_timeout(&self) -> Option<Duration> {
        match self.quiesce_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_name: default_device_name(),
            storage_root: default_storage_root(),
            default_volume: default_volume(),
            quiesce_timeout_ms: default_quiesce_timeout_ms(),
        }
    }
}
