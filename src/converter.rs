//! Request/response facade for UI shells
//!
//! [`Converter`] turns the typed result of [`convert_file`] into a flat
//! success flag plus message and remembers the last message, which is what a
//! button-driven front end needs to show after each run.

use crate::parser::convert_file;
use crate::types::{ConversionReport, ConversionResult};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default)]
pub struct Converter {
    last_message: String,
    last_report: Option<ConversionReport>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `input_path` into a CSV file at (the normalized) `output_path`
    ///
    /// Never panics or returns an error; failures come back as
    /// `success == false` with a description in `message`.
    pub fn convert(
        &mut self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> ConversionResult {
        self.last_message.clear();
        self.last_report = None;

        let result = match convert_file(input_path.as_ref(), output_path.as_ref()) {
            Ok(report) => {
                let result = ConversionResult::success(report.success_message());
                self.last_report = Some(report);
                result
            }
            Err(err) => {
                warn!(error = %err, "Conversion failed");
                ConversionResult::failure(err.to_string())
            }
        };

        self.last_message.clone_from(&result.message);
        result
    }

    /// Status text of the most recent [`convert`](Self::convert) call
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Details of the most recent run, if it succeeded
    pub fn last_report(&self) -> Option<&ConversionReport> {
        self.last_report.as_ref()
    }
}
