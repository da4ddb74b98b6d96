//! 1. Upload the train and test series

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use super::{Command, CommandBindings, Flow};
use crate::channel::IoChannel;
use crate::error::ShellResult;

pub const TRAIN_PROMPT: &str = "Please upload your local train CSV file.\n";
pub const TEST_PROMPT: &str = "Please upload your local test CSV file.\n";

pub struct UploadCommand<'a> {
    bindings: CommandBindings<'a>,
}

impl<'a> UploadCommand<'a> {
    pub fn new(bindings: CommandBindings<'a>) -> Self {
        Self { bindings }
    }
}

/// Overwrite `path` with lines read from `io` up to the sentinel
fn upload_into<I: IoChannel + ?Sized>(io: &mut I, path: &Path) -> ShellResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut sink = BufWriter::new(File::create(path)?);
    io.ingest_until_sentinel(&mut sink)
}

impl Command for UploadCommand<'_> {
    fn number(&self) -> u8 {
        1
    }

    fn label(&self) -> &'static str {
        "upload a time series csv file"
    }

    fn execute(&self) -> ShellResult<Flow> {
        let paths = self.bindings.paths;
        let mut io = self.bindings.io.borrow_mut();

        for (prompt, path) in [(TRAIN_PROMPT, &paths.train), (TEST_PROMPT, &paths.test)] {
            io.write_text(prompt)?;
            let lines = upload_into(&mut *io, path)?;
            info!("Uploaded {} lines to {}", lines, path.display());
        }

        Ok(Flow::Continue)
    }
}
