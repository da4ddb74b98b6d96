//! 3. Train on the uploaded train series and detect on the test series

use tracing::warn;

use super::{Command, CommandBindings, Flow};
use crate::error::ShellResult;

pub const DETECTION_COMPLETE: &str = "anomaly detection complete.\n";
pub const NOT_UPLOADED: &str = "please upload a time series first.\n";

pub struct DetectCommand<'a> {
    bindings: CommandBindings<'a>,
}

impl<'a> DetectCommand<'a> {
    pub fn new(bindings: CommandBindings<'a>) -> Self {
        Self { bindings }
    }
}

impl Command for DetectCommand<'_> {
    fn number(&self) -> u8 {
        3
    }

    fn label(&self) -> &'static str {
        "detect anomalies"
    }

    fn execute(&self) -> ShellResult<Flow> {
        let paths = self.bindings.paths;
        if !paths.is_uploaded() {
            warn!("Detect requested before upload");
            self.bindings.io.borrow_mut().write_text(NOT_UPLOADED)?;
            return Ok(Flow::Continue);
        }

        {
            let mut data = self.bindings.data.borrow_mut();
            data.train(&paths.train)?;
            data.detect(&paths.test)?;
        }

        self.bindings.io.borrow_mut().write_text(DETECTION_COMPLETE)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Harness;
    use crate::error::ShellError;

    fn write_uploads(harness: &Harness, train: &str, test: &str) {
        std::fs::write(&harness.paths.train, train).unwrap();
        std::fs::write(&harness.paths.test, test).unwrap();
    }

    fn linear(rows: usize, spike_at: Option<usize>) -> String {
        let mut csv = String::from("A,B\n");
        for t in 0..rows {
            let b = 3.0 * t as f32 + ((t * 13) % 7) as f32 * 0.02;
            let b = if spike_at == Some(t) { b - 30.0 } else { b };
            csv.push_str(&format!("{},{}\n", t, b));
        }
        csv
    }

    #[test]
    fn test_detect_fills_reports() {
        let harness = Harness::new(Vec::<String>::new());
        write_uploads(&harness, &linear(60, None), &linear(60, Some(9)));

        let flow = DetectCommand::new(harness.bindings()).execute().unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(harness.output(), DETECTION_COMPLETE);

        let data = harness.data.borrow();
        assert_eq!(data.reports().len(), 1);
        assert_eq!(data.reports()[0].description, "A-B");
        assert_eq!(data.reports()[0].time_step, 10);
    }

    #[test]
    fn test_refuses_before_upload() {
        let harness = Harness::new(Vec::<String>::new());
        DetectCommand::new(harness.bindings()).execute().unwrap();
        assert_eq!(harness.output(), NOT_UPLOADED);
        assert!(harness.data.borrow().reports().is_empty());
    }

    #[test]
    fn test_malformed_upload_propagates() {
        let harness = Harness::new(Vec::<String>::new());
        write_uploads(&harness, "A,B\n1,2\n3\n", &linear(5, None));

        let err = DetectCommand::new(harness.bindings()).execute().unwrap_err();
        assert!(matches!(err, ShellError::TimeSeries(_)));
        assert_eq!(harness.output(), "");
    }
}
