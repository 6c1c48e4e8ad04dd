use anyhow::{Context, Result};
use futures::StreamExt;
use sagestream_llm::{try_line_stream_with_buffer, EventPrinter, LineBuffer, PrintSummary};
use std::io::Write;
use tracing::info;

use crate::events::EventStream;

/// Reassemble `events` into record lines and print them to `writer`
pub async fn replay<W: Write>(
    events: EventStream,
    buffer: LineBuffer,
    writer: W,
) -> Result<PrintSummary> {
    let mut lines = try_line_stream_with_buffer(events, buffer);
    let mut printer = EventPrinter::new(writer);

    while let Some(line) = lines.next().await {
        let line = line?;
        printer
            .print_line(&line)
            .with_context(|| format!("Failed to render line {}", printer.summary().lines))?;
    }

    let summary = printer.summary().clone();
    info!(
        lines = summary.lines,
        records = summary.records,
        content_events = summary.content_events,
        tokens = ?summary.tokens,
        "Replay complete"
    );

    Ok(summary)
}
