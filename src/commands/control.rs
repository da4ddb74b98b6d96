//! 5. Reserved slot and 6. exit

use tracing::debug;

use super::{Command, CommandBindings, Flow};
use crate::error::ShellResult;

/// Reserved menu slot; listed but does nothing yet
pub struct UploadAnomaliesCommand<'a> {
    _bindings: CommandBindings<'a>,
}

impl<'a> UploadAnomaliesCommand<'a> {
    pub fn new(bindings: CommandBindings<'a>) -> Self {
        Self {
            _bindings: bindings,
        }
    }
}

impl Command for UploadAnomaliesCommand<'_> {
    fn number(&self) -> u8 {
        5
    }

    fn label(&self) -> &'static str {
        "upload anomalies and analyze results"
    }

    fn execute(&self) -> ShellResult<Flow> {
        debug!("Reserved menu entry selected");
        Ok(Flow::Continue)
    }
}

pub struct ExitCommand<'a> {
    _bindings: CommandBindings<'a>,
}

impl<'a> ExitCommand<'a> {
    pub fn new(bindings: CommandBindings<'a>) -> Self {
        Self {
            _bindings: bindings,
        }
    }
}

impl Command for ExitCommand<'_> {
    fn number(&self) -> u8 {
        6
    }

    fn label(&self) -> &'static str {
        "exit"
    }

    fn execute(&self) -> ShellResult<Flow> {
        Ok(Flow::Exit)
    }
}
