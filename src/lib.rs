//! peerster-ui: terminal front end for a Peerster gossip node.
//!
//! The crate polls a node's REST surface and keeps a local view of its
//! peers, files, message log and routable destinations up to date without
//! rebuilding what is already on screen.
//!
//! # Architecture
//!
//! Data flows one way, from the node to the screen:
//! - **Fetch**: [`StatusSync`] reads the four sections concurrently through
//!   the [`peerster_api::NodeApi`] trait
//! - **Reconcile**: peers and files are replaced, new messages are appended
//!   by [`MessageAppender`], pickers are rebuilt by [`render_options`]
//! - **Schedule**: [`Poller`] repeats the tick on an injectable [`Clock`]
//!   until stopped
//! - **Draw**: the [`tui`] module renders the shared [`NodeView`]
//!
//! Origins are colored with [`color_for`], a stable hash of the peer name.

pub mod actions;
pub mod app_dirs;
pub mod color;
pub mod config;
pub mod error;
pub mod messages;
pub mod options;
pub mod poller;
pub mod surface;
pub mod sync;
pub mod tabs;
pub mod tui;
pub mod view;

pub use color::{ColorPair, ColorValue, Shade, color_for};
pub use config::UiConfig;
pub use error::{Result, UiError};
pub use messages::{MessageAppender, MessageEntry, MessageKind, MessageLog, label_for};
pub use options::{ExclusiveChoice, SelectionOutcome, WILDCARD, render_options};
pub use poller::{Clock, Poller, PollerHandle, TokioClock};
pub use surface::{ChoiceSurface, ListSurface, MessageSurface};
pub use sync::{Snapshot, StatusSync, TickReport};
pub use tabs::{Panel, TabGroup};
pub use view::{NodeView, Section, SyncStatus};
