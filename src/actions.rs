//! User actions sent to the node.
//!
//! The input line means something different on each panel: a message on
//! *Messages*, a peer address on *Peers*, and `share <name>` or
//! `get <hash> [save-as]` on *Files*. Input is validated here so an obviously
//! bad request never reaches the node.

use crate::error::{Result, UiError};
use crate::tabs::Panel;
use crate::view::NodeView;
use peerster_api::{NodeApi, OutgoingMessage};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Hex length of a SHA-256 metafile hash.
pub const FILE_HASH_LEN: usize = 64;

/// A parsed, validated request from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send `text` to the composer's selected destination.
    Send { text: String },
    /// Start gossiping with a peer.
    AddPeer { address: String },
    /// Index a file from the node's shared directory.
    Share { file: String },
    /// Download a file by hash from the selected peer.
    Request { hash: String, save_as: String },
}

impl Command {
    /// Interpret `input` in the context of `panel`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Input`] for empty input, an unknown files
    /// sub-command, or a malformed hash.
    pub fn parse(panel: Panel, input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match panel {
            Panel::Messages => {
                if trimmed.is_empty() {
                    return Err(UiError::Input("message text is empty".into()));
                }
                Ok(Self::Send {
                    text: input.to_owned(),
                })
            }
            Panel::Peers => {
                if trimmed.is_empty() {
                    return Err(UiError::Input("peer address is empty".into()));
                }
                if trimmed.contains(char::is_whitespace) {
                    return Err(UiError::Input(format!("invalid peer address: {trimmed}")));
                }
                Ok(Self::AddPeer {
                    address: trimmed.to_owned(),
                })
            }
            Panel::Files => parse_files_command(trimmed),
        }
    }
}

fn parse_files_command(input: &str) -> Result<Command> {
    let mut words = input.split_whitespace();
    match words.next() {
        Some("share") => {
            let file = words.collect::<Vec<_>>().join(" ");
            if file.is_empty() {
                return Err(UiError::Input("usage: share <file name>".into()));
            }
            Ok(Command::Share { file })
        }
        Some("get") => {
            let hash = words
                .next()
                .ok_or_else(|| UiError::Input("usage: get <hash> [save-as]".into()))?;
            validate_hash(hash)?;
            let save_as = match words.collect::<Vec<_>>().join(" ") {
                name if name.is_empty() => hash.to_owned(),
                name => name,
            };
            Ok(Command::Request {
                hash: hash.to_ascii_lowercase(),
                save_as,
            })
        }
        Some(other) => Err(UiError::Input(format!(
            "unknown command '{other}', expected share or get"
        ))),
        None => Err(UiError::Input("usage: share <file name> | get <hash> [save-as]".into())),
    }
}

/// Check that `hash` is a hex-encoded SHA-256 digest.
pub fn validate_hash(hash: &str) -> Result<()> {
    if hash.len() != FILE_HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(UiError::Input(format!(
            "file hash must be {FILE_HASH_LEN} hex characters"
        )));
    }
    Ok(())
}

/// Turn a command into the request body or call it implies, reading the
/// pickers from `view`.
///
/// Returns `None` for [`Command::AddPeer`], which is not a `/message` post.
///
/// # Errors
///
/// Returns [`UiError::Input`] when a file request has no peer selected.
pub fn outgoing_for(command: &Command, view: &NodeView) -> Result<Option<OutgoingMessage>> {
    let outgoing = match command {
        Command::Send { text } => OutgoingMessage::text(
            text.clone(),
            view.send_to.destination().map(str::to_owned),
        ),
        Command::Share { file } => OutgoingMessage::share_file(file.clone()),
        Command::Request { hash, save_as } => {
            let from = view
                .request_from
                .destination()
                .ok_or_else(|| UiError::Input("no peer selected to request from".into()))?;
            OutgoingMessage::request_file(hash.clone(), from, save_as.clone())
        }
        Command::AddPeer { .. } => return Ok(None),
    };
    Ok(Some(outgoing))
}

/// Execute `command` against the node and return a one-line notice.
///
/// The view lock is only held while reading the pickers, never across a request.
pub async fn execute<A: NodeApi>(api: &A, view: &Mutex<NodeView>, command: Command) -> Result<String> {
    let outgoing = {
        let guard = view.lock().unwrap_or_else(PoisonError::into_inner);
        outgoing_for(&command, &guard)?
    };

    let notice = describe(&command, outgoing.as_ref());
    match outgoing {
        Some(outgoing) => api.send(&outgoing).await?,
        None => {
            if let Command::AddPeer { address } = &command {
                api.add_peer(address).await?;
            }
        }
    }

    info!(notice = %notice, "action sent");
    Ok(notice)
}

fn describe(command: &Command, outgoing: Option<&OutgoingMessage>) -> String {
    let destination = outgoing.and_then(|o| o.destination.as_deref());
    match (command, destination) {
        (Command::AddPeer { address }, _) => format!("added peer {address}"),
        (Command::Send { .. }, Some(to)) => format!("private message sent to {to}"),
        (Command::Send { .. }, None) => "broadcast sent".to_owned(),
        (Command::Share { file }, _) => format!("sharing {file}"),
        (Command::Request { save_as, .. }, Some(from)) => format!("requested {save_as} from {from}"),
        (Command::Request { save_as, .. }, None) => format!("requested {save_as}"),
    }
}

/// Parse `input` for the active panel, execute it, and record the outcome
/// on the view's status line.
pub async fn submit<A: NodeApi>(api: &A, view: &Mutex<NodeView>, input: &str) -> Result<String> {
    let panel = view.lock().unwrap_or_else(PoisonError::into_inner).active_panel();
    let result = match Command::parse(panel, input) {
        Ok(command) => execute(api, view, command).await,
        Err(e) => Err(e),
    };

    let notice = match &result {
        Ok(notice) => notice.clone(),
        Err(e) => e.to_string(),
    };
    view.lock().unwrap_or_else(PoisonError::into_inner).status.notice = Some(notice);
    result
}
