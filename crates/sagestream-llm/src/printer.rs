use futures::{Stream, StreamExt};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

use crate::buffer_utils::LineIterator;
use crate::error::Result;
use crate::streaming::StreamEvent;
use crate::types::{ChunkEvent, Record};

/// Byte opening the JSON object on a record line
pub const JSON_START_MARKER: u8 = b'{';

/// Decode a reassembled line.
///
/// Lines without `{` (including empty ones) yield `Ok(None)`. Anything before
/// the first `{` is discarded; what follows must be valid UTF-8 JSON.
pub fn parse_line(line: &[u8]) -> Result<Option<Record>> {
    let Some(start) = line.iter().position(|&b| b == JSON_START_MARKER) else {
        return Ok(None);
    };

    let text = std::str::from_utf8(&line[start..])?;
    Ok(Some(serde_json::from_str(text)?))
}

/// Counters collected while printing a stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrintSummary {
    pub lines: usize,
    pub records: usize,
    pub content_events: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>,
}

/// Renders record lines to a writer as they arrive.
///
/// Content deltas are written without a newline and flushed immediately. The
/// stop sentinel prints the token count instead.
pub struct EventPrinter<W: Write> {
    writer: W,
    summary: PrintSummary,
}

impl EventPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> EventPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            summary: PrintSummary::default(),
        }
    }

    pub fn print_line(&mut self, line: &[u8]) -> Result<Option<StreamEvent>> {
        self.summary.lines += 1;

        let Some(record) = parse_line(line)? else {
            return Ok(None);
        };
        self.summary.records += 1;

        let event = record.event()?;
        match &event {
            Some(StreamEvent::Content { content }) => {
                self.summary.content_events += 1;
                write!(self.writer, "{}", content)?;
            }
            Some(StreamEvent::Stop { tokens }) => {
                debug!(tokens, "Stop token received");
                self.summary.tokens = Some(*tokens);
                writeln!(self.writer, "\n\nNumber of tokens: {}", tokens)?;
            }
            None => return Ok(None),
        }
        self.writer.flush()?;

        Ok(event)
    }

    pub fn print_lines<L>(&mut self, lines: L) -> Result<PrintSummary>
    where
        L: IntoIterator<Item = Vec<u8>>,
    {
        for line in lines {
            self.print_line(&line)?;
        }
        Ok(self.summary.clone())
    }

    pub async fn print_line_stream<S>(&mut self, lines: S) -> Result<PrintSummary>
    where
        S: Stream<Item = Vec<u8>>,
    {
        let mut lines = Box::pin(lines);
        while let Some(line) = lines.next().await {
            self.print_line(&line)?;
        }
        Ok(self.summary.clone())
    }

    pub fn summary(&self) -> &PrintSummary {
        &self.summary
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reassemble `events` into lines and print them to `writer`
pub fn print_event_stream<S, W>(events: S, writer: W) -> Result<PrintSummary>
where
    S: IntoIterator<Item = ChunkEvent>,
    W: Write,
{
    EventPrinter::new(writer).print_lines(LineIterator::new(events))
}
