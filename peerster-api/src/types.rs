//! Wire types exchanged with a node's REST surface.
//!
//! Field names follow the node's JSON exactly (`Origin`, `ID`, ...), so every
//! field carries an explicit `serde(rename)`.

use serde::{Deserialize, Serialize};

/// A message from the node's append-only log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identifier of the peer that authored the message.
    #[serde(rename = "Origin")]
    pub origin: String,
    /// Sequence number assigned by the origin.
    #[serde(rename = "ID")]
    pub id: u32,
    /// Display text.
    #[serde(rename = "Text", default)]
    pub text: String,
    /// Addressee for private messages; empty, `null` or absent for broadcasts.
    #[serde(rename = "Destination", default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Message {
    /// Build a broadcast message.
    pub fn broadcast(origin: impl Into<String>, id: u32, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            id,
            text: text.into(),
            destination: None,
        }
    }

    /// Build a private message addressed to `destination`.
    pub fn private(
        origin: impl Into<String>,
        id: u32,
        text: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            id,
            text: text.into(),
            destination: Some(destination.into()),
        }
    }

    /// The addressee, if this is a private message.
    ///
    /// An empty destination string means broadcast, same as an absent one.
    pub fn recipient(&self) -> Option<&str> {
        self.destination.as_deref().filter(|d| !d.is_empty())
    }

    /// Returns true if the message is addressed to a single peer.
    pub fn is_private(&self) -> bool {
        self.recipient().is_some()
    }
}

/// A file shared by the node, as listed by `GET /file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name as shared.
    #[serde(rename = "Name")]
    pub name: String,
    /// Hex-encoded content hash (the metafile hash).
    #[serde(rename = "Hash")]
    pub hash: String,
}

/// Body of `POST /message`.
///
/// The node inspects which fields are present: `Text` sends a message
/// (private when `Destination` is set), `File` alone shares a local file,
/// `Request` + `Destination` + `File` downloads a file by hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Message text.
    #[serde(rename = "Text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Target peer for private messages and file requests.
    #[serde(rename = "Destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// File name to share, or the local name to save a requested file under.
    #[serde(rename = "File", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Hex-encoded hash of the file being requested.
    #[serde(rename = "Request", skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
}

impl OutgoingMessage {
    /// A text message. An empty `destination` means broadcast.
    pub fn text(text: impl Into<String>, destination: Option<String>) -> Self {
        Self {
            text: Some(text.into()),
            destination: destination.filter(|d| !d.is_empty()),
            ..Self::default()
        }
    }

    /// Share a file from the node's shared directory.
    pub fn share_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// Ask `destination` for the file whose metafile hash is `hash`.
    pub fn request_file(
        hash: impl Into<String>,
        destination: impl Into<String>,
        save_as: impl Into<String>,
    ) -> Self {
        Self {
            request: Some(hash.into()),
            destination: Some(destination.into()),
            file: Some(save_as.into()),
            ..Self::default()
        }
    }
}
