//! One refresh of a node view.
//!
//! A tick has two phases. [`StatusSync::fetch`] reads the four sections of
//! the node's state concurrently; [`StatusSync::apply`] then mutates the view
//! synchronously in a fixed order (peers, files, messages, destinations). A
//! section that failed to fetch is left exactly as it was.

use crate::messages::MessageAppender;
use crate::surface::ListSurface;
use crate::view::{NodeView, Section};
use peerster_api::{FileDescriptor, Message, NodeApi};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Raw results of one fetch phase, one per section.
#[derive(Debug)]
pub struct Snapshot {
    pub peers: peerster_api::Result<Vec<String>>,
    pub files: peerster_api::Result<Vec<FileDescriptor>>,
    pub messages: peerster_api::Result<Vec<Message>>,
    pub destinations: peerster_api::Result<Vec<String>>,
}

/// What a tick changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based tick number.
    pub tick: u64,
    /// Messages appended this tick.
    pub appended: usize,
    /// Render cursor after the tick.
    pub cursor: usize,
    /// Sections left stale, with the reason.
    pub failures: BTreeMap<Section, String>,
}

impl TickReport {
    /// Returns true if every section was refreshed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reconciles a [`NodeView`] with the node behind `A`.
pub struct StatusSync<A> {
    api: Arc<A>,
    appender: MessageAppender,
    ticks: u64,
}

impl<A: NodeApi> StatusSync<A> {
    /// A synchronizer for the node named `local_id`.
    pub fn new(api: Arc<A>, local_id: impl Into<String>) -> Self {
        Self {
            api,
            appender: MessageAppender::new(local_id),
            ticks: 0,
        }
    }

    /// Number of messages rendered so far.
    pub fn cursor(&self) -> usize {
        self.appender.cursor()
    }

    /// Ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Fetch all four sections concurrently.
    pub async fn fetch(&self) -> Snapshot {
        let api = self.api.as_ref();
        let (peers, files, messages, destinations) = tokio::join!(
            api.peers(),
            api.files(),
            api.messages(),
            api.destinations()
        );
        Snapshot {
            peers,
            files,
            messages,
            destinations,
        }
    }

    /// Apply a snapshot to `view` in section order.
    pub fn apply(&mut self, snapshot: Snapshot, view: &mut NodeView) -> TickReport {
        self.ticks += 1;
        let mut report = TickReport {
            tick: self.ticks,
            cursor: self.appender.cursor(),
            ..TickReport::default()
        };

        match snapshot.peers {
            Ok(peers) => view.peers.replace_all(peers),
            Err(e) => record(&mut report, Section::Peers, &e),
        }

        match snapshot.files {
            Ok(mut files) => {
                files.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.hash.cmp(&b.hash)));
                view.files.replace_all(files);
            }
            Err(e) => record(&mut report, Section::Files, &e),
        }

        match snapshot.messages {
            Ok(log) => {
                let appended = self.appender.append_new(&log, &mut view.messages);
                report.appended = appended.appended;
                report.cursor = appended.cursor;
                if let Some(reason) = appended.interrupted {
                    report.failures.insert(Section::Messages, reason);
                }
            }
            Err(e) => record(&mut report, Section::Messages, &e),
        }

        match snapshot.destinations {
            Ok(destinations) => {
                view.send_to.refresh(destinations.iter().cloned());
                view.request_from.refresh(destinations);
            }
            Err(e) => record(&mut report, Section::Destinations, &e),
        }

        view.status.ticks = report.tick;
        view.status.failures = report.failures.clone();
        debug!(
            tick = report.tick,
            appended = report.appended,
            cursor = report.cursor,
            failed = report.failures.len(),
            "tick applied"
        );
        report
    }

    /// Apply a snapshot to a shared view, holding the lock for the whole
    /// mutation phase.
    pub fn apply_shared(&mut self, snapshot: Snapshot, view: &Mutex<NodeView>) -> TickReport {
        let mut guard = view.lock().unwrap_or_else(PoisonError::into_inner);
        self.apply(snapshot, &mut guard)
    }

    /// Fetch then apply.
    pub async fn tick(&mut self, view: &Mutex<NodeView>) -> TickReport {
        let snapshot = self.fetch().await;
        self.apply_shared(snapshot, view)
    }
}

fn record(report: &mut TickReport, section: Section, error: &peerster_api::ApiError) {
    warn!(section = %section, error = %error, "section left stale");
    report.failures.insert(section, error.to_string());
}
