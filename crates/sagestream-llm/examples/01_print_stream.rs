use anyhow::Result;
use sagestream_llm::{print_event_stream, ChunkEvent};

fn main() -> Result<()> {
    println!("Replaying a chunked token stream");
    println!("================================\n");

    // Records arrive split at arbitrary byte offsets
    let stream = concat!(
        r#"{"choices":[{"delta":{"content":"The"},"index":1}]}"#, "\n",
        r#"{"choices":[{"delta":{"content":" quick"},"index":2}]}"#, "\n",
        r#"{"choices":[{"delta":{"content":" fox"},"index":3}]}"#, "\n",
        r#"{"choices":[{"delta":{"content":"</s>"},"index":4}]}"#, "\n",
    );
    let events: Vec<ChunkEvent> = stream
        .as_bytes()
        .chunks(11)
        .map(ChunkEvent::payload)
        .collect();

    println!("{} chunk events\n", events.len());
    println!("---");

    let summary = print_event_stream(events, std::io::stdout())?;

    println!("---\n");
    println!("Lines: {}", summary.lines);
    println!("Content deltas: {}", summary.content_events);

    Ok(())
}
