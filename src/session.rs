//! Per-run session state between the commands and the detection engine

use std::path::Path;
use tracing::{debug, info};

use crate::engine::{AnomalyDetector, HybridAnomalyDetector};
use crate::error::{ShellError, ShellResult};
use crate::models::Report;
use crate::timeseries::TimeSeries;

/// Whether `value` may be used as a correlation threshold
pub fn is_valid_threshold(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Owns the engine, the current threshold and the latest detection results
pub struct DetectorData {
    engine: Box<dyn AnomalyDetector>,
    threshold: f32,
    reports: Vec<Report>,
}

impl DetectorData {
    pub fn new(engine: Box<dyn AnomalyDetector>) -> Self {
        let threshold = engine.threshold();
        Self {
            engine,
            threshold,
            reports: Vec::new(),
        }
    }

    /// Learn the normal model from the series stored at `path`
    pub fn train(&mut self, path: &Path) -> ShellResult<()> {
        let series = TimeSeries::from_path(path)?;
        debug!(
            "Training on {} ({} rows, {} features)",
            path.display(),
            series.len(),
            series.features().len()
        );
        self.engine.learn_normal(&series)?;
        Ok(())
    }

    /// Run detection on the series at `path`, replacing the stored reports
    pub fn detect(&mut self, path: &Path) -> ShellResult<()> {
        let series = TimeSeries::from_path(path)?;
        let found = self.engine.detect(&series)?;
        self.reports.clear();
        self.reports.extend(found.into_iter().map(Report::from));
        info!(
            "Detected {} anomalies in {}",
            self.reports.len(),
            path.display()
        );
        Ok(())
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Update the engine and the cached threshold together
    pub fn set_threshold(&mut self, value: f32) -> ShellResult<()> {
        if !is_valid_threshold(value) {
            return Err(ShellError::ThresholdOutOfRange(value));
        }
        self.engine.set_threshold(value);
        self.threshold = value;
        debug!("Threshold set to {}", value);
        Ok(())
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }
}

impl Default for DetectorData {
    fn default() -> Self {
        Self::new(Box::new(HybridAnomalyDetector::new()))
    }
}
