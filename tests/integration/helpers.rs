//! Shared helpers for integration tests: a scripted in-memory node and a
//! manually stepped clock.

use peerster_api::{ApiError, FileDescriptor, Message, NodeApi, OutgoingMessage};
use peerster_ui::{Clock, NodeView, Section};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, Semaphore};

/// What the scripted node currently serves.
#[derive(Default)]
pub(crate) struct NodeState {
    pub peers: Vec<String>,
    pub files: Vec<FileDescriptor>,
    pub messages: Vec<Message>,
    pub destinations: Vec<String>,
    pub failing: BTreeSet<Section>,
    pub sent: Vec<OutgoingMessage>,
    pub added_peers: Vec<String>,
}

/// In-memory [`NodeApi`] whose state tests mutate between ticks.
pub(crate) struct ScriptedNode {
    pub id: String,
    state: Mutex<NodeState>,
    /// When set, `messages()` waits for a notification before answering.
    gate: Option<Arc<Notify>>,
    /// Notified whenever `messages()` starts.
    pub fetch_started: Arc<Notify>,
}

impl ScriptedNode {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            state: Mutex::new(NodeState::default()),
            gate: None,
            fetch_started: Arc::new(Notify::new()),
        }
    }

    /// A node whose message fetch blocks until the returned gate is notified.
    pub(crate) fn gated(id: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut node = Self::new(id);
        node.gate = Some(Arc::clone(&gate));
        (node, gate)
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut NodeState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub(crate) fn push_broadcasts(&self, origin: &str, count: u32) {
        self.with_state(|s| {
            for _ in 0..count {
                let id = s.messages.len() as u32 + 1;
                s.messages
                    .push(Message::broadcast(origin, id, format!("message {id}")));
            }
        });
    }

    pub(crate) fn set_destinations(&self, destinations: &[&str]) {
        self.with_state(|s| {
            s.destinations = destinations.iter().map(|d| (*d).to_owned()).collect();
        });
    }

    pub(crate) fn fail(&self, section: Section) {
        self.with_state(|s| s.failing.insert(section));
    }

    pub(crate) fn recover(&self, section: Section) {
        self.with_state(|s| s.failing.remove(&section));
    }

    fn read<T>(&self, section: Section, f: impl FnOnce(&NodeState) -> T) -> peerster_api::Result<T> {
        let state = self.state.lock().unwrap();
        if state.failing.contains(&section) {
            return Err(ApiError::Status {
                path: format!("/{section}"),
                status: 503,
            });
        }
        Ok(f(&state))
    }
}

impl NodeApi for ScriptedNode {
    async fn node_id(&self) -> peerster_api::Result<String> {
        Ok(self.id.clone())
    }

    async fn peers(&self) -> peerster_api::Result<Vec<String>> {
        self.read(Section::Peers, |s| s.peers.clone())
    }

    async fn add_peer(&self, address: &str) -> peerster_api::Result<()> {
        self.with_state(|s| s.added_peers.push(address.to_owned()));
        Ok(())
    }

    async fn messages(&self) -> peerster_api::Result<Vec<Message>> {
        self.fetch_started.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.read(Section::Messages, |s| s.messages.clone())
    }

    async fn send(&self, message: &OutgoingMessage) -> peerster_api::Result<()> {
        self.with_state(|s| s.sent.push(message.clone()));
        Ok(())
    }

    async fn destinations(&self) -> peerster_api::Result<Vec<String>> {
        self.read(Section::Destinations, |s| s.destinations.clone())
    }

    async fn files(&self) -> peerster_api::Result<Vec<FileDescriptor>> {
        self.read(Section::Files, |s| s.files.clone())
    }
}

/// Clock whose sleeps only finish when the test calls [`StepClock::step`].
#[derive(Clone)]
pub(crate) struct StepClock {
    permits: Arc<Semaphore>,
    sleeps: Arc<AtomicUsize>,
}

impl StepClock {
    pub(crate) fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(0)),
            sleeps: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Let one pending (or the next) sleep complete.
    pub(crate) fn step(&self) {
        self.permits.add_permits(1);
    }

    /// Number of sleeps started so far.
    pub(crate) fn sleeps(&self) -> usize {
        self.sleeps.load(Ordering::SeqCst)
    }
}

impl Clock for StepClock {
    async fn sleep(&self, _duration: Duration) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }
}

/// A fresh shared view for `node_id`.
pub(crate) fn shared_view(node_id: &str) -> Arc<Mutex<NodeView>> {
    Arc::new(Mutex::new(NodeView::new(node_id).unwrap()))
}

/// Upper bound for any single await in the tests.
pub(crate) const TIMEOUT: Duration = Duration::from_secs(5);
