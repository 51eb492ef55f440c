//! # Buzzer Control Core (buzzer-core)
//!
//! Command dispatch and playback state control for a networked buzzer
//! appliance.
//!
//! **Purpose:** Validate inbound pub/sub command payloads, drive the audio
//! engine and SD-card listing through capability traits, and publish the
//! storage report back over the bus.
//!
//! **Architecture:** A single serial command loop ([`router::CommandRouter`])
//! demultiplexes `(topic, payload)` messages to the buzz and action handlers.
//! Every command that touches the audio engine first passes through
//! [`playback::PlaybackController::reconcile`], the one synchronization point
//! that cancels and drains whatever the engine is doing before anything new
//! starts.
//!
//! Transport bring-up, storage mounting, and the audio engine itself live in
//! the bootstrap collaborator; this crate consumes them through the
//! [`transport::MessageBus`], [`storage::Storage`], and
//! [`engine::AudioEngine`] traits.

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod playback;
pub mod router;
pub mod storage;
pub mod transport;
pub mod volume;

pub use config::Config;
pub use error::{Error, Result};
