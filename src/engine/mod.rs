//! Correlation-based anomaly detection engine
//!
//! The shell only talks to the engine through [`AnomalyDetector`]. The
//! bundled implementation is [`HybridAnomalyDetector`], which models strongly
//! correlated feature pairs with a regression line and moderately correlated
//! pairs with an enclosing circle.

mod circle;
mod hybrid;
mod stats;

pub use circle::{min_enclosing_circle, Circle};
pub use hybrid::{CorrelatedFeatures, HybridAnomalyDetector, PairModel};
pub use stats::{covariance, dev, linear_reg, mean, pearson, variance, Line, Point};

use thiserror::Error;

use crate::timeseries::TimeSeries;

/// Errors raised by a detection engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no normal model learned yet: train before detecting")]
    NotTrained,

    #[error("training series has no rows")]
    EmptyTrainingSet,

    #[error("feature '{0}' was learned but is missing from the series")]
    MissingFeature(String),
}

/// A single finding as produced by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    /// Correlated pair that broke, as `"A-B"`
    pub description: String,
    /// 1-based row of the test series
    pub time_step: i64,
    /// How far the sample was from the learned model
    pub deviation: f32,
}

/// Interface between the session and a detection engine
pub trait AnomalyDetector {
    /// Learn what "normal" looks like from a training series
    fn learn_normal(&mut self, series: &TimeSeries) -> Result<(), EngineError>;

    /// Report every time step that deviates from the learned model
    fn detect(&self, series: &TimeSeries) -> Result<Vec<AnomalyReport>, EngineError>;

    /// Correlation threshold in [0, 1]
    fn threshold(&self) -> f32;

    fn set_threshold(&mut self, threshold: f32);
}
