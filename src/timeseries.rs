//! Column-oriented time series loaded from CSV text
//!
//! The first line names the features; every following non-empty line is
//! one time step with a float per feature.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

use crate::engine::Point;

#[derive(Error, Debug)]
pub enum TimeSeriesError {
    #[error("missing header line")]
    MissingHeader,

    #[error("empty feature name in column {column}")]
    EmptyFeature { column: usize },

    #[error("duplicate feature name: {0}")]
    DuplicateFeature(String),

    #[error("line {line}: expected {expected} values, got {got}")]
    RowLength {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    features: Vec<String>,
    columns: Vec<Vec<f32>>,
}

impl TimeSeries {
    /// Load a series from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self, TimeSeriesError> {
        let file = std::fs::File::open(path).map_err(|source| TimeSeriesError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TimeSeriesError> {
        let mut lines = reader.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(TimeSeriesError::MissingHeader),
            }
        };

        let mut seen = HashSet::new();
        let mut features = Vec::new();
        for (column, name) in header.split(',').enumerate() {
            let name = name.trim();
            if name.is_empty() {
                return Err(TimeSeriesError::EmptyFeature { column: column + 1 });
            }
            if !seen.insert(name.to_string()) {
                return Err(TimeSeriesError::DuplicateFeature(name.to_string()));
            }
            features.push(name.to_string());
        }

        let mut columns = vec![Vec::new(); features.len()];
        for (idx, line) in lines {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let values: Vec<&str> = line.split(',').collect();
            if values.len() != features.len() {
                return Err(TimeSeriesError::RowLength {
                    line: idx + 1,
                    expected: features.len(),
                    got: values.len(),
                });
            }
            for (column, raw) in values.iter().enumerate() {
                let value = raw.trim().parse::<f32>().map_err(|_| {
                    TimeSeriesError::InvalidNumber {
                        line: idx + 1,
                        column: column + 1,
                        value: raw.trim().to_string(),
                    }
                })?;
                columns[column].push(value);
            }
        }

        Ok(Self { features, columns })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Number of time steps
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column(&self, feature: &str) -> Option<&[f32]> {
        self.features
            .iter()
            .position(|f| f == feature)
            .map(|idx| self.columns[idx].as_slice())
    }

    pub(crate) fn column_at(&self, idx: usize) -> &[f32] {
        &self.columns[idx]
    }

    /// Pair up two columns as points, one per time step
    pub(crate) fn points(&self, x: usize, y: usize) -> Vec<Point> {
        self.columns[x]
            .iter()
            .zip(&self.columns[y])
            .map(|(&x, &y)| Point::new(x, y))
            .collect()
    }
}
