//! Message bus capability and topic layout
//!
//! The pub/sub transport (network bring-up, secure channel, the default
//! device-namespace subscription) is owned by the bootstrap layer. This
//! crate sees it as [`MessageBus`] plus a stream of [`BusMessage`] values
//! delivered one at a time to the router.
//!
//! Topic layout mirrors the appliance fleet's convention: shared command
//! topics under `cmd/`, device-scoped topics under `dev/<device>/`.

use async_trait::async_trait;

use crate::error::Result;

/// Report topic for `read_sdcard` listings.
pub const REPORT_TOPIC_FILES: &str = "files";

/// An inbound `(topic, payload)` pair from the transport.
///
/// Transient: produced by the transport, consumed by the router, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

impl BusMessage {
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

/// Pub/sub transport capability.
///
/// `publish` is fire-and-forget: lowest delivery priority, not retained, no
/// acknowledgement awaited. Implementations map this onto their transport's
/// QoS-0 equivalent.
#[async_trait]
pub trait MessageBus: Send + Sync {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<()>;

    async fn subscribe(&self, topic: &str) -> Result<()>;
}

/// Fleet-wide command topic, e.g. `cmd/buzz`.
pub fn command_topic(name: &str) -> String {
    format!("cmd/{}", name)
}

/// Device-scoped topic, e.g. `dev/buzzer/action`.
pub fn device_topic(device: &str, name: &str) -> String {
    format!("dev/{}/{}", device, name)
}
