//! Incremental rendering of the node's append-only message log.
//!
//! The node returns its whole log on every poll. [`MessageAppender`] keeps a
//! cursor into that log and only turns the unseen suffix into
//! [`MessageEntry`] values, so nothing already on screen is rebuilt.

use crate::color::{ColorPair, color_for};
use crate::error::Result;
use crate::surface::MessageSurface;
use peerster_api::Message;
use tracing::{debug, info, warn};

/// Whether a message went to everyone or to a single peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Visible to all peers.
    Broadcast,
    /// Addressed to one peer.
    Private,
}

impl MessageKind {
    /// Classify a wire message.
    pub fn of(message: &Message) -> Self {
        if message.is_private() {
            Self::Private
        } else {
            Self::Broadcast
        }
    }

    /// Returns true for private messages.
    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

/// One rendered line of the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    /// Sequence number from the origin.
    pub id: u32,
    /// Authoring peer.
    pub origin: String,
    /// Derived heading, see [`label_for`].
    pub label: String,
    /// Message body.
    pub text: String,
    /// Broadcast or private.
    pub kind: MessageKind,
    /// Colors used for the origin.
    pub colors: ColorPair,
}

impl MessageEntry {
    /// Build the display entry for `message` as seen by `local_id`.
    pub fn from_message(message: &Message, local_id: &str) -> Self {
        Self {
            id: message.id,
            origin: message.origin.clone(),
            label: label_for(message, local_id),
            text: message.text.clone(),
            kind: MessageKind::of(message),
            colors: color_for(&message.origin),
        }
    }
}

/// Heading shown above a message.
///
/// Broadcasts read `Message <id>`. Private messages addressed to the local
/// node read `Private message`; any other private message names its
/// recipient.
pub fn label_for(message: &Message, local_id: &str) -> String {
    match message.recipient() {
        None => format!("Message {}", message.id),
        Some(to) if to == local_id => "Private message".to_owned(),
        Some(to) => format!("Private message to {to}"),
    }
}

/// Result of one [`MessageAppender::append_new`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendReport {
    /// Entries handed to the surface in this pass.
    pub appended: usize,
    /// Cursor after the pass.
    pub cursor: usize,
    /// Set when the surface failed; the cursor stops at the last good entry.
    pub interrupted: Option<String>,
    /// The log was shorter than the cursor and was ignored.
    pub regressed: bool,
}

/// Cursor-driven appender for one node view.
#[derive(Debug, Clone)]
pub struct MessageAppender {
    cursor: usize,
    local_id: String,
}

impl MessageAppender {
    /// A fresh appender with the cursor at zero.
    #[must_use]
    pub fn new(local_id: impl Into<String>) -> Self {
        Self {
            cursor: 0,
            local_id: local_id.into(),
        }
    }

    /// Number of log entries already rendered.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Name of the viewing node.
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Render `log[cursor..]` onto `surface`.
    ///
    /// The cursor moves past each entry only once the surface accepted it.
    /// A log shorter than the cursor breaks the append-only contract (a
    /// restarted node, for instance); it is reported and nothing is rendered.
    pub fn append_new<S>(&mut self, log: &[Message], surface: &mut S) -> AppendReport
    where
        S: MessageSurface + ?Sized,
    {
        let mut report = AppendReport {
            cursor: self.cursor,
            ..AppendReport::default()
        };

        let Some(unseen) = log.get(self.cursor..) else {
            warn!(
                cursor = self.cursor,
                log_len = log.len(),
                "message log shrank, keeping cursor"
            );
            report.regressed = true;
            return report;
        };

        for message in unseen {
            let entry = MessageEntry::from_message(message, &self.local_id);
            if let Err(e) = surface.append_entry(entry) {
                warn!(cursor = self.cursor, error = %e, "message render interrupted");
                report.interrupted = Some(e.to_string());
                break;
            }
            self.cursor += 1;
            report.appended += 1;
        }

        report.cursor = self.cursor;
        if report.appended > 0 {
            debug!(appended = report.appended, cursor = self.cursor, "messages appended");
        }
        report
    }
}

/// The rendered message log held by a node view.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<MessageEntry>,
    echo: bool,
}

impl MessageLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty log that also writes every appended entry to the tracing log.
    #[must_use]
    pub fn echoing() -> Self {
        Self {
            entries: Vec::new(),
            echo: true,
        }
    }

    /// Entries in arrival order.
    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    /// Number of rendered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageSurface for MessageLog {
    fn append_entry(&mut self, entry: MessageEntry) -> Result<()> {
        if self.echo {
            info!(
                origin = %entry.origin,
                label = %entry.label,
                private = entry.kind.is_private(),
                "{}",
                entry.text
            );
        }
        self.entries.push(entry);
        Ok(())
    }
}
