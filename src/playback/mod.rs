//! Playback state control

pub mod controller;

pub use controller::{PlaybackController, PlaybackMode};
