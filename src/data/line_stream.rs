//! Line-oriented reading of level sources
//!
//! Level files are read one line at a time: each layer parser pulls exactly
//! the lines it owns and leaves the rest of the stream for the next layer.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A stream of text lines with their terminators stripped
pub struct LineStream<R> {
    reader: R,
    buffer: String,
    line_number: usize,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
        }
    }

    /// Read the next line, or `None` once the source is exhausted.
    ///
    /// The returned slice borrows the stream's internal buffer, so it is only
    /// valid until the next call.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(
            self.buffer.trim_end_matches(|c: char| c == '\n' || c == '\r'),
        ))
    }

    /// Number of lines handed out so far (1-based number of the last line)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> LineStream<&'a [u8]> {
    /// Stream over in-memory level text
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl LineStream<BufReader<File>> {
    /// Open a level file for line-by-line reading
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}
