//! 2. Show and change the correlation threshold

use tracing::{debug, info};

use super::{Command, CommandBindings, Flow};
use crate::error::ShellResult;
use crate::session::is_valid_threshold;

pub const CURRENT_THRESHOLD: &str = "The current correlation threshold is ";
pub const THRESHOLD_REJECTED: &str = "please choose a value between 0 and 1.\n";

pub struct AlgorithmSettingsCommand<'a> {
    bindings: CommandBindings<'a>,
}

impl<'a> AlgorithmSettingsCommand<'a> {
    pub fn new(bindings: CommandBindings<'a>) -> Self {
        Self { bindings }
    }
}

impl Command for AlgorithmSettingsCommand<'_> {
    fn number(&self) -> u8 {
        2
    }

    fn label(&self) -> &'static str {
        "algorithm settings"
    }

    fn execute(&self) -> ShellResult<Flow> {
        let current = self.bindings.data.borrow().threshold();

        let value = {
            let mut io = self.bindings.io.borrow_mut();
            io.write_text(CURRENT_THRESHOLD)?;
            io.write_float(current)?;
            io.write_text("\n")?;

            let mut value = io.read_float()?;
            while !is_valid_threshold(value) {
                debug!("Rejected threshold {}", value);
                io.write_text(THRESHOLD_REJECTED)?;
                value = io.read_float()?;
            }
            value
        };

        self.bindings.data.borrow_mut().set_threshold(value)?;
        info!("Correlation threshold changed from {} to {}", current, value);
        Ok(Flow::Continue)
    }
}
