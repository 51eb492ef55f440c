//! Playback state controller
//!
//! Owns the single current activity (idle / normal playback / diagnostic
//! test) and the transition that drains the engine before anything new
//! starts. Every command that touches the engine passes through
//! [`PlaybackController::reconcile`]; no handler talks to the engine without
//! it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::engine::AudioEngine;
use crate::error::Result;

/// Current playback activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Idle,
    Playing,
    TestMode,
}

impl std::fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackMode::Idle => write!(f, "idle"),
            PlaybackMode::Playing => write!(f, "playing"),
            PlaybackMode::TestMode => write!(f, "test_mode"),
        }
    }
}

/// Serializes every command-triggered engine transition.
///
/// The mode value is the only shared mutable state in this crate; it is
/// owned here and mutated only through [`reconcile`](Self::reconcile) and
/// [`set_idle`](Self::set_idle). The mutex is held across the whole
/// transition, so the invariant holds even if a bootstrap layer dispatches
/// commands concurrently.
pub struct PlaybackController {
    engine: Arc<dyn AudioEngine>,
    mode: Mutex<PlaybackMode>,
    quiesce_timeout: Option<Duration>,
}

impl PlaybackController {
    pub fn new(engine: Arc<dyn AudioEngine>, quiesce_timeout: Option<Duration>) -> Self {
        Self {
            engine,
            mode: Mutex::new(PlaybackMode::Idle),
            quiesce_timeout,
        }
    }

    /// Cancel and drain whatever the engine is doing, then claim the mode
    /// for the next activity.
    ///
    /// Sequence: request cancellation (idempotent), suspend until the
    /// engine reports quiescence, restore the default configuration if the
    /// mode being left is [`PlaybackMode::TestMode`], then set the mode to
    /// `TestMode` or `Playing` per `entering_test`. Callers that start no
    /// new activity afterwards are responsible for
    /// [`set_idle`](Self::set_idle).
    ///
    /// This is a blocking rendezvous with the engine's own execution
    /// context. With a `None` quiesce timeout a wedged engine stalls all
    /// further command processing; the bounded default turns that into a
    /// logged [`crate::engine::EngineError::QuiesceTimeout`] instead, and
    /// the mode is left unchanged so a later command retries the same
    /// transition.
    pub async fn reconcile(&self, entering_test: bool) -> Result<()> {
        let mut mode = self.mode.lock().await;

        self.engine.cancel().await;
        if let Err(e) = self.engine.await_quiescent(self.quiesce_timeout).await {
            error!("engine failed to quiesce, command processing degraded: {}", e);
            return Err(e.into());
        }

        if *mode == PlaybackMode::TestMode {
            self.engine.restore_defaults().await;
        }

        let next = if entering_test {
            PlaybackMode::TestMode
        } else {
            PlaybackMode::Playing
        };
        debug!("playback mode: {} -> {}", *mode, next);
        *mode = next;
        Ok(())
    }

    /// Drop back to idle after a command that leaves nothing running.
    pub async fn set_idle(&self) {
        let mut mode = self.mode.lock().await;
        debug!("playback mode: {} -> {}", *mode, PlaybackMode::Idle);
        *mode = PlaybackMode::Idle;
    }

    /// Current mode snapshot.
    pub async fn mode(&self) -> PlaybackMode {
        *self.mode.lock().await
    }
}
