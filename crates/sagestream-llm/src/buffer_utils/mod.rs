mod buffering;
mod line_iterator;
mod line_stream;

pub use buffering::{LineBuffer, LINE_DELIMITER};
pub use line_iterator::LineIterator;
pub use line_stream::{
    line_stream, line_stream_with_buffer, try_line_stream, try_line_stream_with_buffer,
};
