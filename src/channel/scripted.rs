//! Channel that replays a fixed script and records what was written

use std::collections::VecDeque;
use std::io::BufRead;

use super::{parse_float, strip_line_ending, IoChannel, NOT_A_NUMBER};
use crate::error::{ShellError, ShellResult};

/// Deterministic channel for tests and `--script` replays
#[derive(Debug, Default, Clone)]
pub struct ScriptedIo {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedIo {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Load a script, one input line per line of text
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut input = VecDeque::new();
        for line in reader.split(b'\n') {
            let mut line = String::from_utf8_lossy(&line?).into_owned();
            line.push('\n');
            input.push_back(strip_line_ending(line));
        }
        Ok(Self {
            input,
            output: String::new(),
        })
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn output_lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }

    /// Input lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl IoChannel for ScriptedIo {
    fn read_line(&mut self) -> ShellResult<String> {
        self.input
            .pop_front()
            .ok_or(ShellError::EndOfInput("a line of input"))
    }

    fn read_float(&mut self) -> ShellResult<f32> {
        loop {
            let line = self
                .input
                .pop_front()
                .ok_or(ShellError::EndOfInput("a number"))?;
            if let Some(value) = parse_float(&line) {
                return Ok(value);
            }
            self.output.push_str(NOT_A_NUMBER);
        }
    }

    fn write_text(&mut self, text: &str) -> ShellResult<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_float(&mut self, value: f32) -> ShellResult<()> {
        self.output.push_str(&value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_in_order_then_ends() {
        let mut io = ScriptedIo::new(["1", "0.5"]);
        assert_eq!(io.read_line().unwrap(), "1");
        assert_eq!(io.read_float().unwrap(), 0.5);
        assert_eq!(io.remaining(), 0);
        assert!(matches!(io.read_line(), Err(ShellError::EndOfInput(_))));
    }

    #[test]
    fn test_output_log_is_append_only() {
        let mut io = ScriptedIo::default();
        io.write_text("a\n").unwrap();
        io.write_float(1.5).unwrap();
        io.write_text("\nb\n").unwrap();
        assert_eq!(io.output(), "a\n1.5\nb\n");
        assert_eq!(io.output_lines(), vec!["a", "1.5", "b"]);
    }

    #[test]
    fn test_from_reader() {
        let script = "3\r\n1\n\ndone\n";
        let mut io = ScriptedIo::from_reader(script.as_bytes()).unwrap();
        assert_eq!(io.remaining(), 4);
        assert_eq!(io.read_line().unwrap(), "3");
        assert_eq!(io.read_line().unwrap(), "1");
        assert_eq!(io.read_line().unwrap(), "");
    }

    #[test]
    fn test_from_reader_keeps_non_utf8_lines() {
        let script: &[u8] = b"1\nx\xff\ndone\n";
        let mut io = ScriptedIo::from_reader(script).unwrap();
        assert_eq!(io.remaining(), 3);
        assert_eq!(io.read_line().unwrap(), "1");
        assert_eq!(io.read_line().unwrap(), "x\u{FFFD}");
    }

    #[test]
    fn test_read_float_answers_non_numbers() {
        let mut io = ScriptedIo::new(["abc", "0.3"]);
        assert_eq!(io.read_float().unwrap(), 0.3);
        assert_eq!(io.output(), NOT_A_NUMBER);
    }
}
