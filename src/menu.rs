//! Numbered command menu and its dispatch loop

use std::cell::RefCell;
use tracing::{debug, info, warn};

use crate::channel::IoChannel;
use crate::commands::{standard_commands, Command, CommandBindings, Flow};
use crate::error::{ShellError, ShellResult};

pub const DEFAULT_GREETING: &str =
    "Welcome to the Anomaly Detection Server.\nPlease choose an option:\n";
pub const INVALID_SELECTION: &str = "invalid option, please choose a number from the menu.\n";

/// Ordered registry of commands driven by one IO channel
pub struct CommandMenu<'a> {
    io: &'a RefCell<dyn IoChannel>,
    greeting: String,
    commands: Vec<Box<dyn Command + 'a>>,
}

impl<'a> CommandMenu<'a> {
    /// Empty menu; add entries with [`register`](Self::register)
    pub fn new(io: &'a RefCell<dyn IoChannel>, greeting: impl Into<String>) -> Self {
        Self {
            io,
            greeting: greeting.into(),
            commands: Vec::new(),
        }
    }

    /// Menu with the six standard entries
    pub fn standard(
        bindings: CommandBindings<'a>,
        greeting: impl Into<String>,
    ) -> ShellResult<Self> {
        let mut menu = Self::new(bindings.io, greeting);
        for command in standard_commands(bindings) {
            menu.register(command)?;
        }
        Ok(menu)
    }

    /// Append a command; its number must not be taken
    pub fn register(&mut self, command: Box<dyn Command + 'a>) -> ShellResult<()> {
        let number = command.number();
        if self.commands.iter().any(|c| c.number() == number) {
            return Err(ShellError::DuplicateMenuEntry(number));
        }
        debug!("Registered menu entry {}: {}", number, command.label());
        self.commands.push(command);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Greeting followed by every description, in registration order
    pub fn render(&self) -> String {
        let mut text = self.greeting.clone();
        for command in &self.commands {
            text.push_str(&command.description());
        }
        text
    }

    /// Command whose number matches `selection`
    pub fn resolve(&self, selection: &str) -> Option<&dyn Command> {
        let number: u8 = selection.trim().parse().ok()?;
        self.commands
            .iter()
            .find(|c| c.number() == number)
            .map(|c| c.as_ref())
    }

    /// Show the menu and dispatch selections until an exit command runs
    ///
    /// Unknown selections get a message and the menu again. End of input and
    /// command failures end the loop with an error.
    pub fn run(&self) -> ShellResult<()> {
        loop {
            self.io.borrow_mut().write_text(&self.render())?;
            let selection = self.io.borrow_mut().read_line()?;

            let Some(command) = self.resolve(&selection) else {
                warn!("Unknown menu selection: {:?}", selection);
                self.io.borrow_mut().write_text(INVALID_SELECTION)?;
                continue;
            };

            debug!("Running '{}'", command.label());
            if command.execute()? == Flow::Exit {
                info!("Session finished");
                return Ok(());
            }
        }
    }
}
