//! Channel bound to real streams

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use super::{parse_float, strip_line_ending, IoChannel, NOT_A_NUMBER};
use crate::error::{ShellError, ShellResult};

/// Interactive channel over a reader/writer pair
///
/// Output is flushed after every write so prompts show up before the next
/// blocking read.
pub struct TerminalIo<R, W> {
    reader: R,
    writer: W,
}

impl TerminalIo<BufReader<Stdin>, Stdout> {
    /// Channel bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Bytes that are not UTF-8 come back as U+FFFD instead of failing
    fn next_line(&mut self, waiting_for: &'static str) -> ShellResult<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShellError::EndOfInput(waiting_for));
        }
        Ok(strip_line_ending(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead, W: Write> IoChannel for TerminalIo<R, W> {
    fn read_line(&mut self) -> ShellResult<String> {
        self.next_line("a line of input")
    }

    fn read_float(&mut self) -> ShellResult<f32> {
        loop {
            let line = self.next_line("a number")?;
            if let Some(value) = parse_float(&line) {
                return Ok(value);
            }
            self.write_text(NOT_A_NUMBER)?;
        }
    }

    fn write_text(&mut self, text: &str) -> ShellResult<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_float(&mut self, value: f32) -> ShellResult<()> {
        write!(self.writer, "{}", value)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> TerminalIo<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut io = terminal("first\r\nsecond\nlast");
        assert_eq!(io.read_line().unwrap(), "first");
        assert_eq!(io.read_line().unwrap(), "second");
        assert_eq!(io.read_line().unwrap(), "last");
        assert!(matches!(io.read_line(), Err(ShellError::EndOfInput(_))));
    }

    #[test]
    fn test_read_float_skips_garbage() {
        let mut io = terminal("abc\n\n 0.75\n");
        assert_eq!(io.read_float().unwrap(), 0.75);
        assert_eq!(
            String::from_utf8(io.into_writer()).unwrap(),
            "please enter a number.\nplease enter a number.\n"
        );
    }

    #[test]
    fn test_non_utf8_line_is_not_fatal() {
        let mut io = TerminalIo::new(Cursor::new(b"caf\xe9,B\r\n4\n".to_vec()), Vec::new());
        assert_eq!(io.read_line().unwrap(), "caf\u{FFFD},B");
        assert_eq!(io.read_line().unwrap(), "4");
    }

    #[test]
    fn test_ingest_non_utf8_upload() {
        let mut io = TerminalIo::new(Cursor::new(b"caf\xe9,B\n1,2\ndone\n".to_vec()), Vec::new());
        let mut sink = Vec::new();
        assert_eq!(io.ingest_until_sentinel(&mut sink).unwrap(), 2);
        assert_eq!(String::from_utf8(sink).unwrap(), "caf\u{FFFD},B\n1,2\n");
    }

    #[test]
    fn test_read_float_end_of_input() {
        let mut io = terminal("abc\n");
        assert!(matches!(io.read_float(), Err(ShellError::EndOfInput(_))));
    }

    #[test]
    fn test_writes_reach_the_writer() {
        let mut io = terminal("");
        io.write_text("threshold is ").unwrap();
        io.write_float(0.9).unwrap();
        io.write_text("\n").unwrap();
        assert_eq!(
            String::from_utf8(io.into_writer()).unwrap(),
            "threshold is 0.9\n"
        );
    }

    #[test]
    fn test_ingest_into_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anomalyTrain.csv");
        let mut io = terminal("A,B\n1,2\ndone\n");
        let mut file = std::fs::File::create(&path).unwrap();
        assert_eq!(io.ingest_until_sentinel(&mut file).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A,B\n1,2\n");
        assert_eq!(
            String::from_utf8(io.into_writer()).unwrap(),
            "Upload complete.\n"
        );
    }
}
