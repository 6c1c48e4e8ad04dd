use std::iter::FusedIterator;

use tracing::{debug, warn};

use super::buffering::LineBuffer;
use crate::types::ChunkEvent;

/// Append a data event to the buffer, or log and skip anything else.
/// Returns whether the buffer grew.
pub(crate) fn absorb_event(buffer: &mut LineBuffer, event: ChunkEvent) -> bool {
    match event {
        ChunkEvent::PayloadPart(part) => {
            buffer.extend(&part.bytes);
            true
        }
        ChunkEvent::Unknown(event) => {
            warn!(event = %event, "Unknown event type, skipping");
            false
        }
    }
}

pub(crate) fn log_trailing_bytes(buffer: &LineBuffer) {
    if !buffer.is_empty() {
        debug!(
            pending_bytes = buffer.len(),
            "Event source exhausted with an unterminated trailing line"
        );
    }
}

/// Pull-based reassembler turning chunk events into complete lines.
///
/// Chunks are only pulled from the source when the buffer holds no complete
/// line. Bytes after the last delimiter are never yielded; once the source is
/// exhausted the iterator keeps returning `None`.
pub struct LineIterator<I> {
    source: I,
    buffer: LineBuffer,
    exhausted: bool,
    skipped_events: usize,
}

impl<I> LineIterator<I>
where
    I: Iterator<Item = ChunkEvent>,
{
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::with_buffer(source, LineBuffer::with_capacity(4096))
    }

    /// Use a preconfigured buffer, e.g. one with compaction enabled
    pub fn with_buffer<S>(source: S, buffer: LineBuffer) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
            buffer,
            exhausted: false,
            skipped_events: 0,
        }
    }

    /// Buffered bytes not yet returned as part of a line
    pub fn pending(&self) -> &[u8] {
        self.buffer.pending()
    }

    /// Number of events skipped for lacking a payload
    pub fn skipped_events(&self) -> usize {
        self.skipped_events
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }
}

impl<I> Iterator for LineIterator<I>
where
    I: Iterator<Item = ChunkEvent>,
{
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.buffer.next_line() {
                return Some(line);
            }

            if self.exhausted {
                return None;
            }

            match self.source.next() {
                Some(event) => {
                    if !absorb_event(&mut self.buffer, event) {
                        self.skipped_events += 1;
                    }
                }
                None => {
                    self.exhausted = true;
                    log_trailing_bytes(&self.buffer);
                    return None;
                }
            }
        }
    }
}

impl<I> FusedIterator for LineIterator<I> where I: Iterator<Item = ChunkEvent> {}
