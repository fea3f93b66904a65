//! Host and sandbox talking over the channel

use jovibe_preview::{
    BridgeMessage, ConsoleHost, ConsoleKind, Envelope, FrameId, ValueHeap, CIRCULAR, PROLOGUE,
};
use serde_json::json;
use std::thread;

#[test]
fn test_boot_clears_previous_transcript() {
    let mut host = ConsoleHost::new();
    let frame = host.load("<html><head></head><body></body></html>");
    assert!(frame.srcdoc.contains(PROLOGUE));

    let mut heap = ValueHeap::new();
    let hello = heap.primitive("hello");
    frame.console.boot();
    frame.console.log(&heap, &[hello]);
    assert_eq!(host.pump(), 2);
    assert_eq!(host.messages().len(), 1);

    frame.console.boot();
    host.pump();
    assert!(host.messages().is_empty());
}

#[test]
fn test_messages_from_previous_frame_rejected() {
    let mut host = ConsoleHost::new();
    let old = host.load("<p>v1</p>");
    let new = host.load("<p>v2</p>");
    assert_ne!(old.id, new.id);

    let mut heap = ValueHeap::new();
    let stale = heap.primitive("stale");
    let fresh = heap.primitive("fresh");
    old.console.log(&heap, &[stale]);
    new.console.warn(&heap, &[fresh]);

    assert_eq!(host.pump(), 1);
    let messages = host.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, ConsoleKind::Warn);
    assert_eq!(messages[0].display(), "fresh");
}

#[test]
fn test_circular_object_logged_once() {
    let mut host = ConsoleHost::new();
    let frame = host.load("");

    let mut heap = ValueHeap::new();
    let obj = heap.object();
    heap.insert(obj, "me", obj);
    frame.console.info(&heap, &[obj]);
    host.pump();

    assert_eq!(host.messages()[0].args, vec![json!({ "me": CIRCULAR })]);
}

#[test]
fn test_arrival_order_across_threads() {
    let mut host = ConsoleHost::new();
    let frame = host.load("");
    let console = frame.console.clone();

    thread::spawn(move || {
        let mut heap = ValueHeap::new();
        for i in 0..5 {
            let n = heap.primitive(i);
            console.log(&heap, &[n]);
        }
    })
    .join()
    .unwrap();

    assert_eq!(host.pump(), 5);
    let order: Vec<_> = host.messages().iter().map(|m| m.args[0].clone()).collect();
    assert_eq!(order, vec![json!(0), json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn test_raw_payloads_from_browser() {
    let mut host = ConsoleHost::new();
    let frame = host.load("");
    let source = FrameId::from_raw(frame.id.get());

    assert!(host.receive_json(source, r#"{"type":"log","message":["a"],"timestamp":"1:00:00 PM"}"#));
    assert!(host.receive_json(source, r#"{"type":"log","message":[],"timestamp":"1:00:01 PM"}"#));
    assert!(!host.receive_json(source, r#"{"type":"log"}"#));
    assert!(!host.receive_json(source, "not json"));
    assert!(!host.receive_json(FrameId::from_raw(999), r#"{"type":"log","message":["b"]}"#));
    assert!(host.try_receive_json(source, "{").is_err());
    assert_eq!(host.messages().len(), 2);
    assert_eq!(host.messages()[1].display(), "");

    host.clear();
    assert!(host.messages().is_empty());
}

#[test]
fn test_bare_console_call_matches_across_paths() {
    let mut host = ConsoleHost::new();
    let frame = host.load("");
    let heap = ValueHeap::new();

    frame.console.log(&heap, &[]);
    assert_eq!(host.pump(), 1);

    let posted = BridgeMessage::Console(host.messages()[0].clone()).to_json();
    assert!(host.receive_json(frame.id, &posted));
    assert_eq!(host.messages().len(), 2);
    assert_eq!(host.messages()[0], host.messages()[1]);
}

#[test]
fn test_nothing_accepted_before_load() {
    let mut host = ConsoleHost::new();
    let accepted = host.receive(Envelope {
        source: FrameId::from_raw(1),
        payload: BridgeMessage::Clear,
    });
    assert!(!accepted);
    assert_eq!(host.active_frame(), None);
}
