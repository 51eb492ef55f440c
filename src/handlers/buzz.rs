//! Buzz command handler
//!
//! Validates a "play this file at this volume" payload and starts playback.
//! Fire-and-forget: no acknowledgement is published in either direction;
//! observability is log-only.

use std::sync::Arc;

use tracing::info;

use crate::commands::BuzzCommand;
use crate::engine::AudioEngine;
use crate::error::Result;
use crate::playback::PlaybackController;
use crate::storage::Storage;

/// Handles payloads on the fleet-wide buzz command topic.
pub struct BuzzHandler {
    controller: Arc<PlaybackController>,
    engine: Arc<dyn AudioEngine>,
    storage: Arc<dyn Storage>,
    default_volume: u8,
}

impl BuzzHandler {
    pub fn new(
        controller: Arc<PlaybackController>,
        engine: Arc<dyn AudioEngine>,
        storage: Arc<dyn Storage>,
        default_volume: u8,
    ) -> Self {
        Self {
            controller,
            engine,
            storage,
            default_volume,
        }
    }

    /// Parse, validate, and execute a raw buzz payload.
    ///
    /// Any parse, validation, or engine failure propagates to the router,
    /// which logs it and drops the message; no retry, no reply.
    pub async fn handle(&self, payload: &[u8]) -> Result<()> {
        let cmd = BuzzCommand::parse(payload)?;

        let volume = cmd.volume.unwrap_or(self.default_volume);
        let path = self.storage.resolve(&cmd.file);

        self.controller.reconcile(false).await?;
        self.engine.set_volume(volume, volume).await;
        self.engine.start_file(&path).await?;

        info!("buzz: file='{}', volume=0x{:X}", cmd.file, volume);
        Ok(())
    }
}
