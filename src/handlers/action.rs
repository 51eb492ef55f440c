//! Action command handler
//!
//! Dispatches the closed set of maintenance actions: soft reset, diagnostic
//! sine test, and the storage listing report.

use std::sync::Arc;

use tracing::{info, warn};

use crate::commands::{Action, FilesReport};
use crate::engine::{AudioEngine, SINE_TEST_SKIP_RATE};
use crate::error::Result;
use crate::playback::PlaybackController;
use crate::storage::Storage;
use crate::transport::{MessageBus, REPORT_TOPIC_FILES};

/// Handles payloads on the device-scoped action topic.
pub struct ActionHandler {
    controller: Arc<PlaybackController>,
    engine: Arc<dyn AudioEngine>,
    storage: Arc<dyn Storage>,
    bus: Arc<dyn MessageBus>,
    default_volume: u8,
}

impl ActionHandler {
    pub fn new(
        controller: Arc<PlaybackController>,
        engine: Arc<dyn AudioEngine>,
        storage: Arc<dyn Storage>,
        bus: Arc<dyn MessageBus>,
        default_volume: u8,
    ) -> Self {
        Self {
            controller,
            engine,
            storage,
            bus,
            default_volume,
        }
    }

    /// Parse, validate, and execute a raw action payload.
    ///
    /// Failures propagate to the router, which logs them and drops the
    /// message. A failing `read_sdcard` publishes nothing at all.
    pub async fn handle(&self, payload: &[u8]) -> Result<()> {
        match Action::parse(payload, self.default_volume)? {
            Action::SoftReset => self.soft_reset().await,
            Action::SineTest { volume } => self.sine_test(volume).await,
            Action::ReadSdcard => self.read_sdcard().await,
        }
    }

    /// Stop everything and force the engine back to its default
    /// configuration.
    ///
    /// The restore here is unconditional, on top of the restore `reconcile`
    /// already performs when leaving test mode.
    async fn soft_reset(&self) -> Result<()> {
        warn!("soft_reset");

        self.controller.reconcile(false).await?;
        self.engine.restore_defaults().await;
        self.controller.set_idle().await;
        Ok(())
    }

    /// Diagnostic sine-test tone. The only path that enters test mode.
    async fn sine_test(&self, volume: u8) -> Result<()> {
        warn!("sine_test: volume={}", volume);

        self.controller.reconcile(true).await?;

        self.engine.reset().await;
        self.engine.enable_test_mode(true).await;
        self.engine.set_volume(volume, volume).await;
        self.engine.play_tone(SINE_TEST_SKIP_RATE).await;
        Ok(())
    }

    /// Enumerate the storage root and publish the listing on the report
    /// topic.
    async fn read_sdcard(&self) -> Result<()> {
        warn!("read_sdcard");

        let entries = self.storage.list_root().await?;

        info!("*** dir listing start ***");
        for name in &entries {
            info!("  {}", name);
        }
        info!("*** dir listing end ***");

        let payload = FilesReport::new(entries).to_payload()?;
        self.bus.publish(REPORT_TOPIC_FILES, &payload).await?;
        Ok(())
    }
}
