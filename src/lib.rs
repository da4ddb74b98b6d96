//! anomaly-shell - interactive anomaly detection over uploaded time series
//!
//! A numbered text menu lets the user upload a train and a test series,
//! tune the correlation threshold, run detection and list the anomalies.
//!
//! The pieces, leaves first:
//! - [`channel`]: line-oriented IO channels (terminal and scripted)
//! - [`session`]: [`DetectorData`], the per-run state around the engine
//! - [`commands`]: the menu entries
//! - [`menu`]: the dispatch loop
//! - [`engine`] and [`timeseries`]: the bundled detector and CSV loader

pub mod channel;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod menu;
pub mod models;
pub mod session;
pub mod timeseries;

pub use channel::{IoChannel, ScriptedIo, TerminalIo};
pub use commands::{Command, CommandBindings, Flow, UploadPaths};
pub use error::{ShellError, ShellResult};
pub use menu::CommandMenu;
pub use models::Report;
pub use session::DetectorData;
