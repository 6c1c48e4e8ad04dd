use sagestream_llm::{print_event_stream, ChunkEvent, EventPrinter, StreamError};

#[test]
fn test_print_event_stream_end_to_end() {
    let events = vec![
        ChunkEvent::payload(b"{\"choices\":[{\"delta\":{\"content\":\" a\"},\"index\":1}]}\n"),
        ChunkEvent::payload(b"{\"choices\":[{\"delta\":{\"content\":\" chall"),
        ChunkEvent::payload(b"enging\"},\"index\":2}]}\n"),
        ChunkEvent::payload(b"{\"choices\":[{\"delta\":{\"content\":\" problem\"},\"index\":3}]}\n"),
        ChunkEvent::payload(b"{\"choices\":[{\"delta\":{\"content\":\"</s>\"},\"index\":4}]}\n"),
    ];

    let mut out = Vec::new();
    let summary = print_event_stream(events, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        " a challenging problem\n\nNumber of tokens: 4\n"
    );
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.content_events, 3);
    assert_eq!(summary.tokens, Some(4));
}

#[test]
fn test_prefixed_lines_are_decoded() {
    let events = vec![ChunkEvent::payload(
        b"data:{\"choices\":[{\"delta\":{\"content\":\"ok\"},\"index\":1}]}\n",
    )];

    let mut out = Vec::new();
    print_event_stream(events, &mut out).unwrap();
    assert_eq!(out, b"ok");
}

#[test]
fn test_incomplete_record_is_not_printed() {
    let events = vec![
        ChunkEvent::payload(b"{\"choices\":[{\"delta\":{\"content\":\"x\"},\"index\":1}]}\n"),
        ChunkEvent::payload(b"{\"choices\":[{\"delta\":{\"content\":\"y\""),
    ];

    let mut out = Vec::new();
    let summary = print_event_stream(events, &mut out).unwrap();
    assert_eq!(out, b"x");
    assert_eq!(summary.records, 1);
}

#[test]
fn test_output_before_failure_is_kept() {
    let lines = vec![
        b"{\"choices\":[{\"delta\":{\"content\":\"partial\"},\"index\":1}]}".to_vec(),
        b"{not json}".to_vec(),
        b"{\"choices\":[{\"delta\":{\"content\":\"never\"},\"index\":2}]}".to_vec(),
    ];

    let mut printer = EventPrinter::new(Vec::new());
    let err = printer.print_lines(lines).unwrap_err();

    assert!(matches!(err, StreamError::Json(_)));
    assert_eq!(printer.summary().content_events, 1);
    assert_eq!(printer.into_inner(), b"partial");
}
