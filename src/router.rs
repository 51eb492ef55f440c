//! Command router
//!
//! Demultiplexes inbound `(topic, payload)` messages to the buzz and action
//! handlers and owns the one subscription this layer adds beyond the
//! transport's default device-namespace subscription.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::engine::AudioEngine;
use crate::error::Result;
use crate::handlers::{ActionHandler, BuzzHandler};
use crate::playback::PlaybackController;
use crate::storage::Storage;
use crate::transport::{command_topic, device_topic, BusMessage, MessageBus};

/// Maps inbound topics to handlers and runs the serial command loop.
pub struct CommandRouter {
    buzz_topic: String,
    action_topic: String,
    buzz: BuzzHandler,
    action: ActionHandler,
}

impl CommandRouter {
    pub fn new(
        config: &Config,
        controller: Arc<PlaybackController>,
        engine: Arc<dyn AudioEngine>,
        storage: Arc<dyn Storage>,
        bus: Arc<dyn MessageBus>,
    ) -> Self {
        let buzz = BuzzHandler::new(
            Arc::clone(&controller),
            Arc::clone(&engine),
            Arc::clone(&storage),
            config.default_volume,
        );
        let action = ActionHandler::new(
            controller,
            engine,
            storage,
            bus,
            config.default_volume,
        );

        Self {
            buzz_topic: command_topic("buzz"),
            action_topic: device_topic(&config.device_name, "action"),
            buzz,
            action,
        }
    }

    /// (Re-)establish this layer's subscriptions after a transport connect.
    ///
    /// The transport subscribes the device namespace (which carries the
    /// action topic) by itself; only the fleet-wide buzz topic must be
    /// added here.
    pub async fn on_connect(&self, bus: &dyn MessageBus) -> Result<()> {
        bus.subscribe(&self.buzz_topic).await
    }

    /// Route one message to at most one handler per topic match.
    ///
    /// Topics are compared for exact equality, never by prefix. The two
    /// command topics are disjoint, so at most one handler fires; that is a
    /// property of the topic space, not enforced here.
    ///
    /// Handler errors end here: logged and dropped, per-command, never
    /// escalated.
    pub async fn dispatch(&self, msg: BusMessage) {
        if msg.topic == self.buzz_topic {
            if let Err(e) = self.buzz.handle(&msg.payload).await {
                warn!("buzz: {}", e);
            }
        }

        if msg.topic == self.action_topic {
            if let Err(e) = self.action.handle(&msg.payload).await {
                error!("action: {}", e);
            }
        }
    }

    /// Serial command loop: one message at a time, in delivery order.
    ///
    /// Runs until the transport side of the channel closes.
    pub async fn run(&self, mut rx: mpsc::Receiver<BusMessage>) {
        while let Some(msg) = rx.recv().await {
            self.dispatch(msg).await;
        }
        debug!("command channel closed, router stopping");
    }
}
