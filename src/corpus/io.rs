//! Streaming line reader and writer for UTF-8 corpus files.
//!
//! [`LineReader`] yields one [`Line`] per input line with its terminator
//! (`\n` or `\r\n`) removed. A line that is not valid UTF-8 is reported as
//! [`TasrifError::Encoding`] and reading can continue with the next line;
//! an underlying I/O failure is reported as [`TasrifError::Io`].
//!
//! [`LineWriter`] writes one line per call, always terminated by `\n`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TasrifError};

/// A decoded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the input.
    pub number: usize,
    /// Line content without its terminator.
    pub text: String,
}

/// Reads a corpus one line at a time.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl LineReader<BufReader<File>> {
    /// Open a corpus file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TasrifError::resource_open(path, e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap an already open reader.
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> Option<Result<Line>> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e.into())),
        }
        self.line_number += 1;

        strip_terminator(&mut self.buf);

        let line = match std::str::from_utf8(&self.buf) {
            Ok(text) => Ok(Line {
                number: self.line_number,
                text: text.to_string(),
            }),
            Err(e) => Err(TasrifError::encoding(
                self.line_number,
                format!("{e}: '{}'", String::from_utf8_lossy(&self.buf)),
            )),
        };
        Some(line)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line()
    }
}

fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Writes a corpus one line at a time.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    inner: W,
    lines_written: usize,
}

impl LineWriter<BufWriter<File>> {
    /// Create (or truncate) a corpus file for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| TasrifError::resource_open(path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LineWriter<W> {
    /// Wrap an already open writer.
    pub fn new(inner: W) -> Self {
        LineWriter {
            inner,
            lines_written: 0,
        }
    }

    /// Write `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush buffered lines to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_strips_terminators() {
        let reader = LineReader::new(Cursor::new("أ ب\r\nج\n\nد"));
        let lines: Vec<Line> = reader.map(|l| l.unwrap()).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text, "أ ب");
        assert_eq!(lines[1].text, "ج");
        assert_eq!(lines[2].text, "");
        assert_eq!(lines[3].text, "د");
        assert_eq!(lines[3].number, 4);
    }

    #[test]
    fn test_reader_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert!(reader.next().is_none());
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn test_reader_invalid_utf8_then_continues() {
        let data: Vec<u8> = Vec::from_iter(b"ok\n".iter().chain(&[0xff, 0xfe, b'\n']).chain(b"next\n").copied());
        let mut reader = LineReader::new(Cursor::new(data));

        assert_eq!(reader.next().unwrap().unwrap().text, "ok");

        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, TasrifError::Encoding { line: 2, .. }));

        let line = reader.next().unwrap().unwrap();
        assert_eq!(line.text, "next");
        assert_eq!(line.number, 3);
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineReader::open("/nonexistent/corpus.txt").unwrap_err();
        assert!(matches!(err, TasrifError::ResourceOpen { .. }));
    }

    #[test]
    fn test_writer() {
        let mut writer = LineWriter::new(Vec::new());
        writer.write_line("كتب كتب").unwrap();
        writer.write_line("").unwrap();
        assert_eq!(writer.lines_written(), 2);

        let bytes = writer.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "كتب كتب\n\n");
    }

    #[test]
    fn test_create_in_missing_directory() {
        let err = LineWriter::create("/nonexistent/dir/out.txt").unwrap_err();
        assert!(matches!(err, TasrifError::ResourceOpen { .. }));
    }
}
