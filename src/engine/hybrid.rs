//! Regression + enclosing-circle detector

use tracing::debug;

use super::circle::{min_enclosing_circle, Circle};
use super::stats::{dev, linear_reg, pearson, Line, Point};
use super::{AnomalyDetector, AnomalyReport, EngineError};
use crate::timeseries::TimeSeries;

/// Default correlation needed for a regression model
pub const DEFAULT_THRESHOLD: f32 = 0.9;
/// Pairs above this (but under the threshold) get a circle model
pub const CIRCLE_CORRELATION: f32 = 0.5;
/// Slack applied to the largest training deviation
const TOLERANCE_FACTOR: f32 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub enum PairModel {
    Regression(Line),
    Circle(Circle),
}

impl PairModel {
    fn deviation(&self, p: Point) -> f32 {
        match self {
            PairModel::Regression(line) => dev(p, line),
            PairModel::Circle(circle) => circle.center.distance(&p),
        }
    }
}

/// A learned pair of features and how far apart they may drift
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedFeatures {
    pub feature1: String,
    pub feature2: String,
    pub correlation: f32,
    pub model: PairModel,
    /// Deviation above which a sample is anomalous
    pub tolerance: f32,
}

#[derive(Debug, Clone)]
pub struct HybridAnomalyDetector {
    threshold: f32,
    normal_model: Option<Vec<CorrelatedFeatures>>,
}

impl HybridAnomalyDetector {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            normal_model: None,
        }
    }

    /// Pairs learned by the last `learn_normal`
    pub fn normal_model(&self) -> &[CorrelatedFeatures] {
        self.normal_model.as_deref().unwrap_or(&[])
    }

    fn learn_pair(
        &self,
        series: &TimeSeries,
        i: usize,
        j: usize,
        correlation: f32,
    ) -> Option<CorrelatedFeatures> {
        let abs = correlation.abs();
        let points = series.points(i, j);

        let model = if abs >= self.threshold {
            PairModel::Regression(linear_reg(&points))
        } else if abs > CIRCLE_CORRELATION {
            PairModel::Circle(min_enclosing_circle(&points))
        } else {
            return None;
        };

        let max_dev = match &model {
            PairModel::Regression(_) => points
                .iter()
                .map(|p| model.deviation(*p))
                .fold(0.0f32, f32::max),
            PairModel::Circle(circle) => circle.radius,
        };

        let features = series.features();
        Some(CorrelatedFeatures {
            feature1: features[i].clone(),
            feature2: features[j].clone(),
            correlation,
            model,
            tolerance: max_dev * TOLERANCE_FACTOR,
        })
    }
}

impl Default for HybridAnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyDetector for HybridAnomalyDetector {
    fn learn_normal(&mut self, series: &TimeSeries) -> Result<(), EngineError> {
        if series.is_empty() {
            return Err(EngineError::EmptyTrainingSet);
        }

        let n = series.features().len();
        let mut pairs = Vec::new();
        for i in 0..n {
            let mut best: Option<(usize, f32)> = None;
            for j in (i + 1)..n {
                let p = pearson(series.column_at(i), series.column_at(j));
                if best.map_or(true, |(_, m)| p.abs() > m.abs()) {
                    best = Some((j, p));
                }
            }
            if let Some((j, p)) = best {
                if let Some(pair) = self.learn_pair(series, i, j, p) {
                    debug!(
                        "Learned {}-{} (correlation {:.3}, tolerance {:.4})",
                        pair.feature1, pair.feature2, pair.correlation, pair.tolerance
                    );
                    pairs.push(pair);
                }
            }
        }

        debug!("Normal model has {} correlated pairs", pairs.len());
        self.normal_model = Some(pairs);
        Ok(())
    }

    fn detect(&self, series: &TimeSeries) -> Result<Vec<AnomalyReport>, EngineError> {
        let model = self.normal_model.as_ref().ok_or(EngineError::NotTrained)?;

        let mut reports = Vec::new();
        for pair in model {
            let x = series
                .column(&pair.feature1)
                .ok_or_else(|| EngineError::MissingFeature(pair.feature1.clone()))?;
            let y = series
                .column(&pair.feature2)
                .ok_or_else(|| EngineError::MissingFeature(pair.feature2.clone()))?;

            for (t, (&x, &y)) in x.iter().zip(y).enumerate() {
                let deviation = pair.model.deviation(Point::new(x, y));
                if deviation > pair.tolerance {
                    reports.push(AnomalyReport {
                        description: format!("{}-{}", pair.feature1, pair.feature2),
                        time_step: t as i64 + 1,
                        deviation,
                    });
                }
            }
        }
        Ok(reports)
    }

    fn threshold(&self) -> f32 {
        self.threshold
    }

    fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }
}
