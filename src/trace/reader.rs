//! Trace Reader - the input source for a simulation.
//!
//! The [`TraceReader`] turns a line-oriented text source into page references:
//! - One integer page identifier per line
//! - Surrounding whitespace is ignored, blank lines are skipped
//! - Anything else is a [`Error::MalformedReference`], including bytes that
//!   are not valid UTF-8

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::common::{Error, PageId, Result};

/// Lazily reads page references from a text source.
///
/// Yields `Result<PageId>` so read and parse failures surface in order. After
/// the first error the reader is exhausted.
///
/// # File Format
/// ```text
/// 7
/// 0
/// 1
/// 2
/// ```
///
/// # Resource Handling
/// The underlying file is closed when the reader is dropped, on every exit
/// path.
pub struct TraceReader<R = BufReader<File>> {
    reader: R,
    line: Vec<u8>,
    /// 1-based number of the line last read.
    line_number: usize,
    done: bool,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file.
    ///
    /// # Errors
    /// - `Error::InputSourceNotFound` if the file doesn't exist
    /// - `Error::InputReadFailure` for any other I/O error
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::InputSourceNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::InputReadFailure(err),
        })?;

        log::debug!("Opened trace {}", path.display());
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Read references from any buffered source.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Drain the remaining references into memory.
    ///
    /// # Errors
    /// The first read or parse error encountered.
    pub fn read_all(self) -> Result<Vec<PageId>> {
        self.collect()
    }

    fn read_reference(&mut self) -> Result<Option<PageId>> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None); // no input remaining
            }
            self.line_number += 1;

            // Undecodable bytes become U+FFFD and fail to parse below.
            let text = String::from_utf8_lossy(&self.line);
            let token = text.trim();
            if token.is_empty() {
                continue;
            }

            return token
                .parse::<PageId>()
                .map(Some)
                .map_err(|_| Error::MalformedReference {
                    line: self.line_number,
                    token: token.to_string(),
                });
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<PageId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_reference() {
            Ok(Some(page_id)) => Some(Ok(page_id)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Parse a whole trace held in memory.
///
/// # Example
/// ```
/// use pagesim::trace::parse_trace;
/// use pagesim::PageId;
///
/// let trace = parse_trace("1\n2\n\n1\n").unwrap();
/// assert_eq!(trace, vec![PageId(1), PageId(2), PageId(1)]);
/// ```
pub fn parse_trace(text: &str) -> Result<Vec<PageId>> {
    TraceReader::from_reader(text.as_bytes()).read_all()
}

/// Read a whole trace file into memory.
pub fn read_trace<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    TraceReader::open(path)?.read_all()
}
