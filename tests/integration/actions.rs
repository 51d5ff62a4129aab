//! User actions round-tripped through a scripted node.

use crate::helpers::{ScriptedNode, shared_view};
use peerster_ui::actions::{Command, execute, submit};
use peerster_ui::{ChoiceSurface, StatusSync, UiError};
use std::sync::Arc;

const HASH: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

#[tokio::test]
async fn broadcast_from_wildcard_selection() {
    let node = ScriptedNode::new("N1");
    let view = shared_view("N1");

    let notice = submit(&node, &view, "hello everyone").await.unwrap();
    assert_eq!(notice, "broadcast sent");

    let sent = node.with_state(|s| s.sent.clone());
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text.as_deref(), Some("hello everyone"));
    assert_eq!(sent[0].destination, None);
}

#[tokio::test]
async fn private_message_to_selected_destination() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    node.set_destinations(&["N2", "N3"]);
    StatusSync::new(Arc::clone(&node), "N1").tick(&view).await;
    view.lock().unwrap().send_to.select("N3");

    let notice = execute(
        node.as_ref(),
        &view,
        Command::Send {
            text: "psst".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(notice, "private message sent to N3");
    let sent = node.with_state(|s| s.sent.clone());
    assert_eq!(sent[0].destination.as_deref(), Some("N3"));
}

#[tokio::test]
async fn file_request_goes_to_request_from_peer() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    node.set_destinations(&["N2", "N3"]);
    StatusSync::new(Arc::clone(&node), "N1").tick(&view).await;
    view.lock().unwrap().tabs.activate(2).unwrap();

    let notice = submit(node.as_ref(), &view, &format!("get {HASH} photo.jpg"))
        .await
        .unwrap();
    assert_eq!(notice, "requested photo.jpg from N2");

    let sent = node.with_state(|s| s.sent.clone());
    assert_eq!(sent[0].request.as_deref(), Some(HASH));
    assert_eq!(sent[0].destination.as_deref(), Some("N2"));
    assert_eq!(sent[0].file.as_deref(), Some("photo.jpg"));
}

#[tokio::test]
async fn share_file_from_files_tab() {
    let node = ScriptedNode::new("N1");
    let view = shared_view("N1");
    view.lock().unwrap().tabs.activate(2).unwrap();

    submit(&node, &view, "share report.pdf").await.unwrap();
    let sent = node.with_state(|s| s.sent.clone());
    assert_eq!(sent[0].file.as_deref(), Some("report.pdf"));
    assert_eq!(sent[0].request, None);
}

#[tokio::test]
async fn add_peer_from_peers_tab() {
    let node = ScriptedNode::new("N1");
    let view = shared_view("N1");
    view.lock().unwrap().tabs.activate(1).unwrap();

    let notice = submit(&node, &view, "127.0.0.1:5002").await.unwrap();
    assert_eq!(notice, "added peer 127.0.0.1:5002");
    assert_eq!(node.with_state(|s| s.added_peers.clone()), ["127.0.0.1:5002"]);
    assert_eq!(
        view.lock().unwrap().status.notice.as_deref(),
        Some("added peer 127.0.0.1:5002")
    );
}

#[tokio::test]
async fn rejected_input_sends_nothing() {
    let node = ScriptedNode::new("N1");
    let view = shared_view("N1");

    let err = submit(&node, &view, "  ").await.unwrap_err();
    assert!(matches!(err, UiError::Input(_)));
    assert!(node.with_state(|s| s.sent.is_empty()));
    assert_eq!(
        view.lock().unwrap().status.notice.as_deref(),
        Some("invalid input: message text is empty")
    );
}

#[tokio::test]
async fn file_request_without_peer_is_rejected() {
    let node = ScriptedNode::new("N1");
    let view = shared_view("N1");
    view.lock().unwrap().tabs.activate(2).unwrap();

    let err = submit(&node, &view, &format!("get {HASH}")).await.unwrap_err();
    assert!(err.to_string().contains("no peer selected"));
    assert!(node.with_state(|s| s.sent.is_empty()));
}
