//! Command payload parsing and report building
//!
//! Inbound payloads are untyped JSON from the bus. Parsing here is strict
//! about types but tolerant of extras: lookups are case-sensitive, a missing
//! optional field is distinct from a present-but-wrong-type field, and no
//! implicit coercion is performed. Validated commands come out as closed
//! types so downstream dispatch is exhaustive.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::volume::clamp_volume;

/// Parsed `buzz` command: play a file from storage at a volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuzzCommand {
    /// Relative path under the storage root
    pub file: String,

    /// Clamped volume, or `None` when the field was absent
    pub volume: Option<u8>,
}

impl BuzzCommand {
    /// Parse and validate a raw buzz payload.
    ///
    /// `file` must be present and a string; `volume`, if present, must be
    /// numeric and is clamped into `[0, 255]`.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(payload)?;

        let file = match root.get("file").and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => return Err(Error::Validation("no file or not a string".into())),
        };

        let volume = numeric_field(&root, "volume")?.map(clamp_volume);

        Ok(BuzzCommand { file, volume })
    }
}

/// Parsed `action` command.
///
/// The wire format is an open string `type` field; parsing closes it into
/// this enum so every dispatch site is checked for exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop everything and restore the engine's default configuration
    SoftReset,

    /// Diagnostic sine-test tone at the given (already clamped) volume
    SineTest { volume: u8 },

    /// Enumerate the storage root and publish the listing
    ReadSdcard,
}

impl Action {
    /// Parse and validate a raw action payload.
    ///
    /// `type` must be present and a string (exact, case-sensitive match).
    /// An unrecognized value is reported as [`Error::UnknownCommand`]
    /// carrying the literal string.
    pub fn parse(payload: &[u8], default_volume: u8) -> Result<Self> {
        let root: Value = serde_json::from_slice(payload)?;

        let kind = match root.get("type").and_then(Value::as_str) {
            Some(s) => s,
            None => return Err(Error::Validation("no type or not a string".into())),
        };

        match kind {
            "soft_reset" => Ok(Action::SoftReset),
            "sine_test" => {
                let volume = match numeric_field(&root, "volume")? {
                    Some(raw) => clamp_volume(raw),
                    None => default_volume,
                };
                Ok(Action::SineTest { volume })
            }
            "read_sdcard" => Ok(Action::ReadSdcard),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

/// Outbound storage listing report, published on the `files` topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesReport {
    /// Entry names in directory-enumeration order (not sorted)
    pub files: Vec<String>,
}

impl FilesReport {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Serialize to the compact wire form.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Look up an optional numeric field.
///
/// Absent is `Ok(None)`; present but non-numeric is a validation error
/// naming the field. Fractional values truncate toward zero, matching the
/// integer conversion the original firmware applied.
fn numeric_field(root: &Value, name: &str) -> Result<Option<i64>> {
    match root.get(name) {
        None => Ok(None),
        Some(v) => {
            if let Some(n) = v.as_i64() {
                Ok(Some(n))
            } else if let Some(f) = v.as_f64() {
                Ok(Some(f as i64))
            } else {
                Err(Error::Validation(format!("{} not a number", name)))
            }
        }
    }
}
