//! Reassembles newline-delimited JSON records from a chunked inference event
//! stream and prints the text deltas they carry.
//!
//! ```
//! use sagestream_llm::{print_event_stream, ChunkEvent};
//!
//! let events = vec![
//!     ChunkEvent::payload(br#"{"choices":[{"delta":{"content":"Hel"#),
//!     ChunkEvent::payload(b"lo\"},\"index\":1}]}\n"),
//! ];
//!
//! let mut out = Vec::new();
//! let summary = print_event_stream(events, &mut out)?;
//! assert_eq!(out, b"Hello");
//! assert_eq!(summary.content_events, 1);
//! # Ok::<(), sagestream_llm::StreamError>(())
//! ```

pub mod types;
pub mod streaming;
pub mod buffer_utils;
pub mod printer;
pub mod error;

pub use buffer_utils::{
    line_stream, line_stream_with_buffer, try_line_stream, try_line_stream_with_buffer,
    LineBuffer, LineIterator, LINE_DELIMITER,
};
pub use error::{Result, StreamError};
pub use printer::{parse_line, print_event_stream, EventPrinter, PrintSummary, JSON_START_MARKER};
pub use streaming::StreamEvent;
pub use types::{Choice, ChunkEvent, Delta, PayloadPart, Record, STOP_TOKEN};
