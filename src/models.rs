//! Data models shared by the session and the display commands

use crate::engine::AnomalyReport;

/// One anomaly finding kept in the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub description: String,
    pub time_step: i64,
}

impl Report {
    pub fn new(description: impl Into<String>, time_step: i64) -> Self {
        Self {
            description: description.into(),
            time_step,
        }
    }
}

impl From<AnomalyReport> for Report {
    fn from(report: AnomalyReport) -> Self {
        Self::new(report.description, report.time_step)
    }
}

impl std::fmt::Display for Report {
    /// `<time_step>\t<description>`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.time_step, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_anomaly_report_drops_deviation() {
        let report = Report::from(AnomalyReport {
            description: "A-B".to_string(),
            time_step: 7,
            deviation: 3.5,
        });
        assert_eq!(report, Report::new("A-B", 7));
    }

    #[test]
    fn test_display_is_tab_separated() {
        assert_eq!(Report::new("A-C", 12).to_string(), "12\tA-C");
    }
}
