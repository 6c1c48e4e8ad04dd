use futures::{stream, StreamExt};
use sagestream_llm::{line_stream, ChunkEvent, EventPrinter, LineIterator, StreamEvent};

fn events() -> Vec<ChunkEvent> {
    vec![
        ChunkEvent::payload(br#"{"choices":[{"delta":{"content":"Hel"#),
        ChunkEvent::payload(b"lo\"},\"index\":1}]}\n{\"choices\":"),
        ChunkEvent::from_value(serde_json::json!({"Heartbeat": {}})),
        ChunkEvent::payload(br#"[{"delta":{"content":"</s>"},"index":2}]}"#),
        ChunkEvent::payload(b"\n{\"choices\""),
    ]
}

#[tokio::test]
async fn test_line_stream_matches_iterator() {
    let sync_lines: Vec<Vec<u8>> = LineIterator::new(events()).collect();
    let async_lines: Vec<Vec<u8>> = line_stream(stream::iter(events())).collect().await;

    assert_eq!(async_lines, sync_lines);
    assert_eq!(async_lines.len(), 2);
}

#[tokio::test]
async fn test_print_line_stream() {
    let mut printer = EventPrinter::new(Vec::new());
    let summary = printer
        .print_line_stream(line_stream(stream::iter(events())))
        .await
        .unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(summary.tokens, Some(2));
    assert_eq!(
        String::from_utf8(printer.into_inner()).unwrap(),
        "Hello\n\nNumber of tokens: 2\n"
    );
}

#[test]
fn test_stream_event_serialization() {
    let event = StreamEvent::Content {
        content: "Test".to_string(),
    };

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"content\""));
    assert!(json.contains("Test"));
}

#[test]
fn test_stream_event_deserialization_stop() {
    let json = r#"{"type":"stop","tokens":12}"#;
    let event: StreamEvent = serde_json::from_str(json).unwrap();

    assert_eq!(event, StreamEvent::Stop { tokens: 12 });
    assert!(event.is_stop());
}
