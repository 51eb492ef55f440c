//! Test harness for command dispatch integration tests
//!
//! Provides recording mocks for the three capabilities (engine, bus,
//! storage) plus a `Rig` wrapper that wires a router the way the bootstrap
//! collaborator would.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use buzzer_core::config::Config;
use buzzer_core::engine::{AudioEngine, EngineError};
use buzzer_core::error::Result;
use buzzer_core::playback::PlaybackController;
use buzzer_core::router::CommandRouter;
use buzzer_core::storage::Storage;
use buzzer_core::transport::MessageBus;

/// One recorded engine call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Cancel,
    AwaitQuiescent,
    RestoreDefaults,
    SetVolume(u8, u8),
    StartFile(PathBuf),
    Reset,
    EnableTestMode(bool),
    PlayTone(u8),
}

/// Recording [`AudioEngine`] with scriptable failures.
#[derive(Default)]
pub struct MockEngine {
    calls: Mutex<Vec<EngineCall>>,
    quiesce_error: Mutex<Option<EngineError>>,
    start_error: Mutex<Option<EngineError>>,
}

impl MockEngine {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Make the next (and every) quiescence wait fail.
    pub fn wedge(&self) {
        *self.quiesce_error.lock().unwrap() = Some(EngineError::QuiesceTimeout);
    }

    /// Make playback starts fail with the given device code.
    pub fn fail_start(&self, code: i32) {
        *self.start_error.lock().unwrap() = Some(EngineError::Device { code });
    }

    fn push(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AudioEngine for MockEngine {
    async fn cancel(&self) {
        self.push(EngineCall::Cancel);
    }

    async fn await_quiescent(&self, _timeout: Option<Duration>) -> std::result::Result<(), EngineError> {
        self.push(EngineCall::AwaitQuiescent);
        match *self.quiesce_error.lock().unwrap() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn restore_defaults(&self) {
        self.push(EngineCall::RestoreDefaults);
    }

    async fn set_volume(&self, left: u8, right: u8) {
        self.push(EngineCall::SetVolume(left, right));
    }

    async fn start_file(&self, path: &Path) -> std::result::Result<(), EngineError> {
        self.push(EngineCall::StartFile(path.to_path_buf()));
        match *self.start_error.lock().unwrap() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn reset(&self) {
        self.push(EngineCall::Reset);
    }

    async fn enable_test_mode(&self, enabled: bool) {
        self.push(EngineCall::EnableTestMode(enabled));
    }

    async fn play_tone(&self, skip_rate: u8) {
        self.push(EngineCall::PlayTone(skip_rate));
    }
}

/// Recording [`MessageBus`].
#[derive(Default)]
pub struct MockBus {
    publishes: Mutex<Vec<(String, Vec<u8>)>>,
    subscriptions: Mutex<Vec<String>>,
}

impl MockBus {
    pub fn publishes(&self) -> Vec<(String, Vec<u8>)> {
        self.publishes.lock().unwrap().clone()
    }

    pub fn subscriptions(&self) -> Vec<String> {
        self.subscriptions.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageBus for MockBus {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<()> {
        self.publishes
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_vec()));
        Ok(())
    }

    async fn subscribe(&self, topic: &str) -> Result<()> {
        self.subscriptions.lock().unwrap().push(topic.to_string());
        Ok(())
    }
}

/// Scripted [`Storage`] with a fixed enumeration order.
pub struct MockStorage {
    root: PathBuf,
    entries: Vec<String>,
    fail_open: bool,
}

impl MockStorage {
    pub fn with_entries(entries: Vec<&str>) -> Self {
        Self {
            root: PathBuf::from("/sdcard"),
            entries: entries.into_iter().map(String::from).collect(),
            fail_open: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            root: PathBuf::from("/sdcard"),
            entries: Vec::new(),
            fail_open: true,
        }
    }
}

#[async_trait]
impl Storage for MockStorage {
    fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    async fn list_root(&self) -> io::Result<Vec<String>> {
        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::NotFound, "cannot open '/sdcard'"));
        }
        Ok(self.entries.clone())
    }
}

/// Wired router plus handles to its mocks, for call/publish inspection.
pub struct Rig {
    pub engine: Arc<MockEngine>,
    pub bus: Arc<MockBus>,
    pub controller: Arc<PlaybackController>,
    pub router: CommandRouter,
}

impl Rig {
    pub fn new() -> Self {
        Self::with_storage(MockStorage::with_entries(vec![]))
    }

    pub fn with_storage(storage: MockStorage) -> Self {
        let config = Config::default();
        let engine = Arc::new(MockEngine::default());
        let bus = Arc::new(MockBus::default());
        let controller = Arc::new(PlaybackController::new(
            Arc::clone(&engine) as Arc<dyn AudioEngine>,
            config.quiesce_timeout(),
        ));
        let router = CommandRouter::new(
            &config,
            Arc::clone(&controller),
            Arc::clone(&engine) as Arc<dyn AudioEngine>,
            Arc::new(storage) as Arc<dyn Storage>,
            Arc::clone(&bus) as Arc<dyn MessageBus>,
        );

        Self {
            engine,
            bus,
            controller,
            router,
        }
    }
}
