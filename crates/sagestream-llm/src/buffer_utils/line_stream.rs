use futures::{Stream, StreamExt};
use std::pin::Pin;

use super::buffering::LineBuffer;
use super::line_iterator::{absorb_event, log_trailing_bytes};
use crate::types::ChunkEvent;

/// Async counterpart of `LineIterator` for event streams
pub fn line_stream<S>(events: S) -> Pin<Box<dyn Stream<Item = Vec<u8>> + Send>>
where
    S: Stream<Item = ChunkEvent> + Send + 'static,
{
    line_stream_with_buffer(events, LineBuffer::with_capacity(4096))
}

pub fn line_stream_with_buffer<S>(
    events: S,
    buffer: LineBuffer,
) -> Pin<Box<dyn Stream<Item = Vec<u8>> + Send>>
where
    S: Stream<Item = ChunkEvent> + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut events = Box::pin(events);
        let mut buffer = buffer;

        while let Some(event) = events.next().await {
            if !absorb_event(&mut buffer, event) {
                continue;
            }

            // Process all complete lines in buffer
            while let Some(line) = buffer.next_line() {
                yield line;
            }
        }

        log_trailing_bytes(&buffer);
    })
}

/// Line reassembly over a fallible event source.
/// Upstream errors are forwarded as they arrive; buffered bytes are kept.
pub fn try_line_stream<S, E>(
    events: S,
) -> Pin<Box<dyn Stream<Item = Result<Vec<u8>, E>> + Send>>
where
    S: Stream<Item = Result<ChunkEvent, E>> + Send + 'static,
    E: Send + 'static,
{
    try_line_stream_with_buffer(events, LineBuffer::with_capacity(4096))
}

pub fn try_line_stream_with_buffer<S, E>(
    events: S,
    buffer: LineBuffer,
) -> Pin<Box<dyn Stream<Item = Result<Vec<u8>, E>> + Send>>
where
    S: Stream<Item = Result<ChunkEvent, E>> + Send + 'static,
    E: Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut events = Box::pin(events);
        let mut buffer = buffer;

        while let Some(event_result) = events.next().await {
            match event_result {
                Ok(event) => {
                    if !absorb_event(&mut buffer, event) {
                        continue;
                    }

                    while let Some(line) = buffer.next_line() {
                        yield Ok(line);
                    }
                }
                Err(e) => yield Err(e),
            }
        }

        log_trailing_bytes(&buffer);
    })
}
