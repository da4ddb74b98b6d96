//! Menu commands
//!
//! Every command is bound at construction to the session's IO channel,
//! detector state and upload paths through [`CommandBindings`]. The lifetime
//! keeps a command from outliving any of them; commands never create their
//! own.
//!
//! | # | Command |
//! |---|---------|
//! | 1 | [`UploadCommand`] |
//! | 2 | [`AlgorithmSettingsCommand`] |
//! | 3 | [`DetectCommand`] |
//! | 4 | [`DisplayResultsCommand`] |
//! | 5 | [`UploadAnomaliesCommand`] (reserved) |
//! | 6 | [`ExitCommand`] |

mod control;
mod detect;
mod display;
mod settings;
mod upload;

pub use control::{ExitCommand, UploadAnomaliesCommand};
pub use detect::{DetectCommand, DETECTION_COMPLETE, NOT_UPLOADED};
pub use display::{DisplayResultsCommand, RESULTS_DONE};
pub use settings::{AlgorithmSettingsCommand, CURRENT_THRESHOLD, THRESHOLD_REJECTED};
pub use upload::{UploadCommand, TEST_PROMPT, TRAIN_PROMPT};

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::channel::IoChannel;
use crate::error::ShellResult;
use crate::session::DetectorData;

pub const DEFAULT_TRAIN_FILE: &str = "anomalyTrain.csv";
pub const DEFAULT_TEST_FILE: &str = "anomalyTest.csv";

/// What the menu should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Where uploads are persisted and detection reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPaths {
    pub train: PathBuf,
    pub test: PathBuf,
}

impl UploadPaths {
    pub fn new(train: impl Into<PathBuf>, test: impl Into<PathBuf>) -> Self {
        Self {
            train: train.into(),
            test: test.into(),
        }
    }

    /// Default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_TRAIN_FILE), dir.join(DEFAULT_TEST_FILE))
    }

    pub fn is_uploaded(&self) -> bool {
        self.train.is_file() && self.test.is_file()
    }
}

/// Shared handles every command is constructed with
#[derive(Clone, Copy)]
pub struct CommandBindings<'a> {
    pub io: &'a RefCell<dyn IoChannel>,
    pub data: &'a RefCell<DetectorData>,
    pub paths: &'a UploadPaths,
}

impl<'a> CommandBindings<'a> {
    pub fn new(
        io: &'a RefCell<dyn IoChannel>,
        data: &'a RefCell<DetectorData>,
        paths: &'a UploadPaths,
    ) -> Self {
        Self { io, data, paths }
    }
}

/// A numbered menu entry
pub trait Command {
    /// Position in the menu; unique per menu
    fn number(&self) -> u8;

    fn label(&self) -> &'static str;

    /// Menu line, e.g. `"1.upload a time series csv file\n"`
    fn description(&self) -> String {
        format!("{}.{}\n", self.number(), self.label())
    }

    fn execute(&self) -> ShellResult<Flow>;
}

/// The six entries of the standard menu, in menu order
pub fn standard_commands<'a>(bindings: CommandBindings<'a>) -> Vec<Box<dyn Command + 'a>> {
    vec![
        Box::new(UploadCommand::new(bindings)),
        Box::new(AlgorithmSettingsCommand::new(bindings)),
        Box::new(DetectCommand::new(bindings)),
        Box::new(DisplayResultsCommand::new(bindings)),
        Box::new(UploadAnomaliesCommand::new(bindings)),
        Box::new(ExitCommand::new(bindings)),
    ]
}


#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;

    #[test]
    fn test_standard_descriptions() {
        let harness = Harness::new(Vec::<String>::new());
        let descriptions: Vec<String> = standard_commands(harness.bindings())
            .iter()
            .map(|c| c.description())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "1.upload a time series csv file\n",
                "2.algorithm settings\n",
                "3.detect anomalies\n",
                "4.display results\n",
                "5.upload anomalies and analyze results\n",
                "6.exit\n",
            ]
        );
    }

    #[test]
    fn test_upload_paths_in_dir() {
        let paths = UploadPaths::in_dir(Path::new("/data"));
        assert_eq!(paths.train, Path::new("/data/anomalyTrain.csv"));
        assert_eq!(paths.test, Path::new("/data/anomalyTest.csv"));
        assert!(!paths.is_uploaded());
    }
}
