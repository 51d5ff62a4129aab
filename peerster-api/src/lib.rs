//! # peerster-api
//!
//! Typed access to the REST surface a Peerster gossip node exposes for its
//! user interface.
//!
//! ## Endpoints
//!
//! | Method | Path           | Body / response                           |
//! |--------|----------------|-------------------------------------------|
//! | GET    | `/id`          | plain-text node name                      |
//! | GET    | `/node`        | JSON array of peer addresses              |
//! | POST   | `/node`        | plain-text peer address                   |
//! | GET    | `/message`     | JSON array of [`Message`], append-only    |
//! | POST   | `/message`     | JSON [`OutgoingMessage`]                  |
//! | GET    | `/destination` | JSON array of routable peer names         |
//! | GET    | `/file`        | JSON array of [`FileDescriptor`]          |
//!
//! Responses are treated as untrusted: a non-success status, a transport
//! failure and an undecodable body each map to a distinct [`ApiError`]
//! variant so callers can keep stale data on screen and retry later.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::NodeClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use types::{FileDescriptor, Message, OutgoingMessage};

use std::future::Future;

/// Read and write access to one node.
///
/// [`NodeClient`] talks HTTP; tests substitute scripted in-memory nodes.
/// All implementations must be `Send + Sync` so the poller can run on a
/// background task.
pub trait NodeApi: Send + Sync {
    /// The node's own name (`GET /id`).
    fn node_id(&self) -> impl Future<Output = Result<String>> + Send;

    /// Current peer addresses (`GET /node`).
    fn peers(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Ask the node to gossip with `address` (`POST /node`).
    fn add_peer(&self, address: &str) -> impl Future<Output = Result<()>> + Send;

    /// The full message log (`GET /message`).
    fn messages(&self) -> impl Future<Output = Result<Vec<Message>>> + Send;

    /// Submit a message, file share or file request (`POST /message`).
    fn send(&self, message: &OutgoingMessage) -> impl Future<Output = Result<()>> + Send;

    /// Peers the node currently has a route to (`GET /destination`).
    fn destinations(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Files the node is sharing (`GET /file`).
    fn files(&self) -> impl Future<Output = Result<Vec<FileDescriptor>>> + Send;
}
