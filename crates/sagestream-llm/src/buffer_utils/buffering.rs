/// Byte terminating every record line
pub const LINE_DELIMITER: u8 = b'\n';

/// Append-only line buffer with a read cursor.
///
/// Bytes before `read_pos` have already been handed out as lines and are never
/// scanned again. With a compaction threshold set, that consumed prefix is
/// dropped on the next `extend` once it reaches the threshold; `consumed()`
/// keeps counting in stream offsets so it never goes backwards.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: Vec<u8>,
    read_pos: usize,
    // Everything in read_pos..scan_pos is known to contain no delimiter
    scan_pos: usize,
    discarded: usize,
    compact_threshold: Option<usize>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new buffer with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Drop consumed bytes once at least `threshold` of them have piled up
    pub fn with_compaction(mut self, threshold: usize) -> Self {
        self.compact_threshold = Some(threshold);
        self
    }

    /// Add bytes to the end of the buffer
    pub fn extend(&mut self, bytes: &[u8]) {
        if let Some(threshold) = self.compact_threshold {
            if self.read_pos > 0 && self.read_pos >= threshold {
                self.compact();
            }
        }
        self.buffer.extend_from_slice(bytes);
    }

    /// Extract the next line (without its delimiter).
    /// Returns None if no complete line is buffered.
    pub fn next_line(&mut self) -> Option<Vec<u8>> {
        let Some(offset) = self.buffer[self.scan_pos..]
            .iter()
            .position(|&b| b == LINE_DELIMITER)
        else {
            self.scan_pos = self.buffer.len();
            return None;
        };

        let end = self.scan_pos + offset;
        let line = self.buffer[self.read_pos..end].to_vec();
        self.read_pos = end + 1;
        self.scan_pos = self.read_pos;

        Some(line)
    }

    /// Drop every byte before the read cursor
    pub fn compact(&mut self) {
        self.buffer.drain(..self.read_pos);
        self.discarded += self.read_pos;
        self.scan_pos -= self.read_pos;
        self.read_pos = 0;
    }

    /// Buffered bytes not yet returned as part of a line
    pub fn pending(&self) -> &[u8] {
        &self.buffer[self.read_pos..]
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        self.buffer.len() - self.read_pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor into the retained buffer
    pub fn read_pos(&self) -> usize {
        self.read_pos
    }

    /// Total bytes handed out (delimiters included) since creation
    pub fn consumed(&self) -> usize {
        self.discarded + self.read_pos
    }

    /// Bytes currently held, consumed prefix included
    pub fn retained(&self) -> usize {
        self.buffer.len()
    }
}
