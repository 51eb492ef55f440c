//! Audio engine capability
//!
//! The buzzer's audio engine (codec chip, decoder task, DMA) is owned by the
//! bootstrap layer and consumed here through [`AudioEngine`]. The trait
//! surface mirrors the device driver: cancellation, quiescence rendezvous,
//! configuration restore, volume, file playback, and the diagnostic sine
//! test.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Volume applied when a command omits the `volume` field.
pub const DEFAULT_VOLUME: u8 = 0x40;

/// Skip-rate parameter byte for the diagnostic sine test tone.
pub const SINE_TEST_SKIP_RATE: u8 = 0x44;

/// Errors reported by the audio engine capability
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The device rejected or failed an operation, with its raw error code
    #[error("device error (0x{code:X})")]
    Device { code: i32 },

    /// The engine did not reach the waiting state within the bounded wait
    #[error("engine did not quiesce in time")]
    QuiesceTimeout,
}

/// Audio engine capability consumed by the command handlers.
///
/// Implementations run the engine as an independent concurrent activity;
/// all methods here are requests into that activity. `cancel` must be
/// idempotent (safe to call when nothing is playing).
#[async_trait]
pub trait AudioEngine: Send + Sync {
    /// Request cancellation of whatever the engine is currently doing.
    async fn cancel(&self);

    /// Suspend until the engine reports the waiting (quiescent) condition.
    ///
    /// `None` waits forever; `Some(d)` bounds the wait and fails with
    /// [`EngineError::QuiesceTimeout`] on expiry.
    async fn await_quiescent(&self, timeout: Option<Duration>) -> Result<(), EngineError>;

    /// Restore the engine's default (non-diagnostic) configuration.
    async fn restore_defaults(&self);

    /// Set playback volume for both channels.
    async fn set_volume(&self, left: u8, right: u8);

    /// Begin playing the file at `path`.
    async fn start_file(&self, path: &Path) -> Result<(), EngineError>;

    /// Issue a soft reset of the device.
    async fn reset(&self);

    /// Enable or disable the diagnostic test capability.
    async fn enable_test_mode(&self, enabled: bool);

    /// Start the fixed-frequency test tone with the given skip-rate byte.
    async fn play_tone(&self, skip_rate: u8);
}
