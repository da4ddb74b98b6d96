//! Error types for the shell core
//!
//! Only `EndOfInput` and the collaborator failures ever leave the menu loop.
//! Threshold validation and bad menu selections are recovered where they
//! happen and never surface as errors.

use thiserror::Error;

use crate::engine::EngineError;
use crate::timeseries::TimeSeriesError;

/// Errors that can occur while running the shell
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("end of input while waiting for {0}")]
    EndOfInput(&'static str),

    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f32),

    #[error("menu entry {0} is already registered")]
    DuplicateMenuEntry(u8),

    #[error("failed to load time series")]
    TimeSeries(#[from] TimeSeriesError),

    #[error("detection engine failed")]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
