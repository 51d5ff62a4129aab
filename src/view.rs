//! Everything the front end draws for one node.
//!
//! [`NodeView`] is plain data. The synchronization loop writes into it, the
//! terminal front end reads from it and forwards user choices (tab switches,
//! picker moves) back into it.

use crate::error::Result;
use crate::messages::MessageLog;
use crate::options::ExclusiveChoice;
use crate::tabs::{Panel, TabGroup};
use peerster_api::FileDescriptor;
use std::collections::BTreeMap;
use std::fmt;

/// One independently fetched part of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Peers,
    Files,
    Messages,
    Destinations,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Peers => "peers",
            Section::Files => "files",
            Section::Messages => "messages",
            Section::Destinations => "destinations",
        };
        f.write_str(name)
    }
}

/// Outcome of the most recent refresh, shown on the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStatus {
    /// Ticks completed so far.
    pub ticks: u64,
    /// Sections that failed on the last tick, with the error text.
    pub failures: BTreeMap<Section, String>,
    /// Result of the last user action.
    pub notice: Option<String>,
}

impl SyncStatus {
    /// Returns true if the last tick refreshed every section.
    pub fn is_healthy(&self) -> bool {
        self.failures.is_empty()
    }
}

/// State of a node's user interface.
#[derive(Debug, Clone)]
pub struct NodeView {
    /// Name of the node this view belongs to.
    pub node_id: String,
    /// Peer addresses, replaced wholesale each tick.
    pub peers: Vec<String>,
    /// Shared files, sorted by name.
    pub files: Vec<FileDescriptor>,
    /// Rendered messages.
    pub messages: MessageLog,
    /// Composer destination: everyone or one peer.
    pub send_to: ExclusiveChoice,
    /// Peer to download from; never the wildcard.
    pub request_from: ExclusiveChoice,
    /// Messages / Peers / Files.
    pub tabs: TabGroup<Panel>,
    pub status: SyncStatus,
}

impl NodeView {
    /// An empty view for `node_id`.
    pub fn new(node_id: impl Into<String>) -> Result<Self> {
        Self::with_log(node_id, MessageLog::new())
    }

    /// A view that also logs every appended message (headless mode).
    pub fn headless(node_id: impl Into<String>) -> Result<Self> {
        Self::with_log(node_id, MessageLog::echoing())
    }

    fn with_log(node_id: impl Into<String>, messages: MessageLog) -> Result<Self> {
        Ok(Self {
            node_id: node_id.into(),
            peers: Vec::new(),
            files: Vec::new(),
            messages,
            send_to: ExclusiveChoice::with_wildcard(),
            request_from: ExclusiveChoice::without_wildcard(),
            tabs: TabGroup::new(Panel::ALL.to_vec())?,
            status: SyncStatus::default(),
        })
    }

    /// The panel currently shown.
    pub fn active_panel(&self) -> Panel {
        self.tabs.active()
    }

    /// The picker that belongs to the active panel, if any.
    pub fn active_picker_mut(&mut self) -> Option<&mut ExclusiveChoice> {
        match self.tabs.active() {
            Panel::Messages => Some(&mut self.send_to),
            Panel::Files => Some(&mut self.request_from),
            Panel::Peers => None,
        }
    }
}
