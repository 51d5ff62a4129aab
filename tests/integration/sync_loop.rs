//! Tick-level reconciliation against a scripted node.

use crate::helpers::{ScriptedNode, shared_view};
use peerster_api::{FileDescriptor, Message};
use peerster_ui::{ChoiceSurface, Section, StatusSync, WILDCARD};
use std::sync::Arc;

#[tokio::test]
async fn five_then_seven_messages_appends_exactly_two() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.push_broadcasts("N2", 5);
    let first = sync.tick(&view).await;
    assert_eq!(first.appended, 5);

    let before: Vec<_> = view.lock().unwrap().messages.entries().to_vec();

    node.push_broadcasts("N2", 2);
    let second = sync.tick(&view).await;
    assert_eq!(second.appended, 2);
    assert_eq!(second.cursor, 7);

    let view = view.lock().unwrap();
    assert_eq!(view.messages.len(), 7);
    assert_eq!(&view.messages.entries()[..5], before.as_slice());
}

#[tokio::test]
async fn cursor_never_regresses_over_growing_logs() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    let mut last = 0;
    for growth in [0, 3, 0, 1, 4, 0, 2] {
        node.push_broadcasts("N3", growth);
        let report = sync.tick(&view).await;
        assert!(report.cursor >= last, "cursor went from {last} to {}", report.cursor);
        last = report.cursor;
    }
    assert_eq!(last, 10);
    assert_eq!(view.lock().unwrap().messages.len(), 10);
}

#[tokio::test]
async fn failed_message_fetch_keeps_cursor_and_retries() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.push_broadcasts("N2", 3);
    sync.tick(&view).await;

    node.fail(Section::Messages);
    node.push_broadcasts("N2", 2);
    let failed = sync.tick(&view).await;
    assert_eq!(failed.appended, 0);
    assert_eq!(failed.cursor, 3);
    assert!(failed.failures.contains_key(&Section::Messages));
    assert_eq!(view.lock().unwrap().messages.len(), 3);

    node.recover(Section::Messages);
    let retried = sync.tick(&view).await;
    assert_eq!(retried.appended, 2);
    assert!(retried.is_clean());
    assert!(view.lock().unwrap().status.is_healthy());
}

#[tokio::test]
async fn one_failing_section_does_not_block_others() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.with_state(|s| {
        s.peers = vec!["10.0.0.1:5000".into()];
        s.files = vec![
            FileDescriptor {
                name: "b.txt".into(),
                hash: "02".into(),
            },
            FileDescriptor {
                name: "a.txt".into(),
                hash: "01".into(),
            },
        ];
    });
    node.push_broadcasts("N2", 1);
    node.set_destinations(&["N2"]);
    sync.tick(&view).await;

    node.fail(Section::Peers);
    node.with_state(|s| {
        s.peers.clear();
        s.files.clear();
    });
    node.push_broadcasts("N2", 1);
    let report = sync.tick(&view).await;

    assert_eq!(report.failures.len(), 1);
    let view = view.lock().unwrap();
    assert_eq!(view.peers, ["10.0.0.1:5000"], "stale peers stay visible");
    assert!(view.files.is_empty());
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.request_from.selected(), Some("N2"));
}

#[tokio::test]
async fn files_are_listed_by_name() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.with_state(|s| {
        for name in ["zebra.png", "apple.txt", "mango.pdf"] {
            s.files.push(FileDescriptor {
                name: name.into(),
                hash: format!("{name}-hash"),
            });
        }
    });
    sync.tick(&view).await;

    let view = view.lock().unwrap();
    let names: Vec<&str> = view.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["apple.txt", "mango.pdf", "zebra.png"]);
}

#[tokio::test]
async fn selection_survives_destination_growth() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.set_destinations(&["bob", "carol"]);
    sync.tick(&view).await;
    {
        let mut v = view.lock().unwrap();
        assert!(v.send_to.select("bob"));
        assert!(v.request_from.select("bob"));
    }

    node.set_destinations(&["bob", "carol", "dave"]);
    sync.tick(&view).await;

    let v = view.lock().unwrap();
    assert_eq!(v.send_to.selected(), Some("bob"));
    assert_eq!(v.request_from.selected(), Some("bob"));
    assert_eq!(v.send_to.options(), ["", "bob", "carol", "dave"]);
}

#[tokio::test]
async fn removed_selection_falls_back_per_control() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.set_destinations(&["bob", "carol"]);
    sync.tick(&view).await;
    {
        let mut v = view.lock().unwrap();
        v.send_to.select("bob");
        v.request_from.select("bob");
    }

    node.set_destinations(&["dave", "carol"]);
    sync.tick(&view).await;

    let v = view.lock().unwrap();
    assert_eq!(v.request_from.selected(), Some("carol"));
    assert_eq!(v.send_to.selected(), Some(WILDCARD));
}

#[tokio::test]
async fn failed_destination_fetch_keeps_selection() {
    let node = Arc::new(ScriptedNode::new("N1"));
    let view = shared_view("N1");
    let mut sync = StatusSync::new(Arc::clone(&node), "N1");

    node.set_destinations(&["bob", "carol"]);
    sync.tick(&view).await;
    view.lock().unwrap().request_from.select("carol");

    node.fail(Section::Destinations);
    sync.tick(&view).await;
    assert_eq!(view.lock().unwrap().request_from.selected(), Some("carol"));
}

#[tokio::test]
async fn labels_depend_on_viewing_node() {
    let log = vec![
        Message::broadcast("N1", 42, "hello all"),
        Message::private("N1", 43, "just you", "N2"),
    ];

    let sender = Arc::new(ScriptedNode::new("N1"));
    sender.with_state(|s| s.messages = log.clone());
    let sender_view = shared_view("N1");
    StatusSync::new(Arc::clone(&sender), "N1")
        .tick(&sender_view)
        .await;

    let receiver = Arc::new(ScriptedNode::new("N2"));
    receiver.with_state(|s| s.messages = log);
    let receiver_view = shared_view("N2");
    StatusSync::new(Arc::clone(&receiver), "N2")
        .tick(&receiver_view)
        .await;

    let sent: Vec<String> = sender_view
        .lock()
        .unwrap()
        .messages
        .entries()
        .iter()
        .map(|e| e.label.clone())
        .collect();
    assert_eq!(sent, ["Message 42", "Private message to N2"]);

    let received: Vec<String> = receiver_view
        .lock()
        .unwrap()
        .messages
        .entries()
        .iter()
        .map(|e| e.label.clone())
        .collect();
    assert_eq!(received, ["Message 42", "Private message"]);
}
