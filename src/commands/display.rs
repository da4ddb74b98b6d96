//! 4. Print the latest detection results

use super::{Command, CommandBindings, Flow};
use crate::error::ShellResult;

pub const RESULTS_DONE: &str = "Done.\n";

pub struct DisplayResultsCommand<'a> {
    bindings: CommandBindings<'a>,
}

impl<'a> DisplayResultsCommand<'a> {
    pub fn new(bindings: CommandBindings<'a>) -> Self {
        Self { bindings }
    }
}

impl Command for DisplayResultsCommand<'_> {
    fn number(&self) -> u8 {
        4
    }

    fn label(&self) -> &'static str {
        "display results"
    }

    fn execute(&self) -> ShellResult<Flow> {
        let data = self.bindings.data.borrow();
        let mut io = self.bindings.io.borrow_mut();
        for report in data.reports() {
            io.write_text(&format!("{}\n", report))?;
        }
        io.write_text(RESULTS_DONE)?;
        Ok(Flow::Continue)
    }
}
