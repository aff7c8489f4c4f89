//! Line-indexed cursor over a seekable text stream.
//!
//! Event logs are not indexed by line, so seeking to a line index means
//! rewinding to the start and reading forward. Loading counts the lines once
//! up front so that fractional positions (progress bar clicks) can be turned
//! into line indices.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use super::error::LogError;

/// A forward reader with line-index bookkeeping and rewind-based seeking.
#[derive(Debug)]
pub struct LineCursor<R> {
    reader: R,
    /// Stream position at load time; line 0 starts here.
    initial_position: u64,
    total_lines: usize,
    /// Index of the line the next `read_line` returns.
    next_line: usize,
    /// Scratch buffer for discarded lines.
    scratch: Vec<u8>,
}

impl LineCursor<BufReader<File>> {
    /// Open a file and load it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let file = File::open(path.as_ref())?;
        Self::load(BufReader::new(file))
    }
}

impl<R: BufRead + Seek> LineCursor<R> {
    /// Take ownership of a stream positioned at the first line.
    ///
    /// Scans to the end to count lines, then rewinds to the starting position.
    pub fn load(mut reader: R) -> Result<Self, LogError> {
        let initial_position = reader.stream_position()?;
        let mut scratch = Vec::new();

        let mut total_lines = 0;
        loop {
            scratch.clear();
            if reader.read_until(b'\n', &mut scratch)? == 0 {
                break;
            }
            total_lines += 1;
        }
        reader.seek(SeekFrom::Start(initial_position))?;

        Ok(Self {
            reader,
            initial_position,
            total_lines,
            next_line: 0,
            scratch,
        })
    }

    /// Total number of lines counted at load time.
    #[inline]
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Index of the line the next read returns (0-based).
    #[inline]
    pub fn next_line_index(&self) -> usize {
        self.next_line
    }

    /// True once every line has been read.
    pub fn is_at_end(&self) -> bool {
        self.next_line >= self.total_lines
    }

    /// Fraction of lines consumed, in `[0, 1]`. An empty log counts as finished.
    pub fn progress(&self) -> f64 {
        if self.total_lines == 0 {
            1.0
        } else {
            self.next_line as f64 / self.total_lines as f64
        }
    }

    /// Read the next line, including its trailing newline if present.
    ///
    /// Returns `Ok(None)` at end of stream.
    pub fn read_line(&mut self) -> Result<Option<String>, LogError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.next_line += 1;
        Ok(Some(line))
    }

    /// Read and drop the next line without decoding it as text.
    ///
    /// Returns false at end of stream.
    pub fn skip_line(&mut self) -> Result<bool, LogError> {
        self.scratch.clear();
        if self.reader.read_until(b'\n', &mut self.scratch)? == 0 {
            return Ok(false);
        }
        self.next_line += 1;
        Ok(true)
    }

    /// Skip up to `count` lines, returning how many were actually skipped.
    pub fn skip_lines(&mut self, count: usize) -> Result<usize, LogError> {
        let mut skipped = 0;
        while skipped < count && self.skip_line()? {
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Position the cursor so the next read returns line `index`.
    ///
    /// `index` is clamped to `[0, total_lines]`; `total_lines` means end of
    /// stream. Seeking backwards rewinds to the load position and reads
    /// forward again.
    pub fn goto_line(&mut self, index: usize) -> Result<(), LogError> {
        let index = index.min(self.total_lines);

        if index < self.next_line {
            self.reader.seek(SeekFrom::Start(self.initial_position))?;
            self.next_line = 0;
        }
        let distance = index - self.next_line;
        self.skip_lines(distance)?;
        Ok(())
    }
}
