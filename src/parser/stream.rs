use crate::error::Result;
use std::io::BufRead;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Line reader over raw input bytes
///
/// Lines are split on `\n` and decoded lossily, so a stray invalid UTF-8
/// byte costs one replacement character instead of the whole run. A byte
/// order mark at the very start of the input is dropped.
pub struct LineStream<R> {
    reader: R,
    buffer: Vec<u8>,
    lines_read: u64,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            lines_read: 0,
        }
    }

    /// Number of lines fetched so far, including skipped ones
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Fetch the next line, trimmed of surrounding whitespace
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        self.lines_read += 1;

        let decoded = String::from_utf8_lossy(&self.buffer);
        let text: &str = if self.lines_read == 1 {
            decoded.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&decoded)
        } else {
            &decoded
        };

        Ok(Some(text.trim().to_string()))
    }
}
