//! IO channels for the shell protocol
//!
//! The protocol is strictly request/response: every read blocks until the
//! peer answers, and running out of input ends the session.
//!
//! - [`TerminalIo`] wraps any `BufRead`/`Write` pair (normally stdin/stdout)
//! - [`ScriptedIo`] replays a fixed list of input lines and records output

mod scripted;
mod terminal;

pub use scripted::ScriptedIo;
pub use terminal::TerminalIo;

use std::io::Write;
use tracing::{debug, warn};

use crate::error::ShellResult;

/// Line that ends a bulk upload
pub const UPLOAD_SENTINEL: &str = "done";

/// Written once an upload reaches the sentinel
pub const UPLOAD_COMPLETE: &str = "Upload complete.\n";

/// Reply to an answer that is not a number while a float is expected
pub const NOT_A_NUMBER: &str = "please enter a number.\n";

/// Line-oriented text channel between the shell and its user
pub trait IoChannel {
    /// Next full line, without its line terminator
    ///
    /// Invalid UTF-8 is replaced, never reported.
    /// Fails with `ShellError::EndOfInput` when the input is exhausted.
    fn read_line(&mut self) -> ShellResult<String>;

    /// Next line that parses as a float
    ///
    /// Other lines are answered with [`NOT_A_NUMBER`] and skipped. No range
    /// checking happens here.
    fn read_float(&mut self) -> ShellResult<f32>;

    fn write_text(&mut self, text: &str) -> ShellResult<()>;

    fn write_float(&mut self, value: f32) -> ShellResult<()>;

    /// Copy lines into `sink` until the upload sentinel, then confirm
    ///
    /// Lines are written verbatim, each followed by `\n`. Returns the number
    /// of lines copied.
    fn ingest_until_sentinel(&mut self, sink: &mut dyn Write) -> ShellResult<usize> {
        let mut count = 0;
        loop {
            let line = self.read_line()?;
            if line == UPLOAD_SENTINEL {
                break;
            }
            sink.write_all(line.as_bytes())?;
            sink.write_all(b"\n")?;
            count += 1;
        }
        sink.flush()?;
        debug!("Ingested {} lines", count);
        self.write_text(UPLOAD_COMPLETE)?;
        Ok(count)
    }
}

/// Parse a float answer, ignoring surrounding whitespace
pub(crate) fn parse_float(line: &str) -> Option<f32> {
    match line.trim().parse::<f32>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring non-numeric input: {:?}", line);
            None
        }
    }
}

/// Drop a trailing `\n` or `\r\n`
pub(crate) fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
