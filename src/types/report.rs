use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line counters accumulated over one conversion run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionStats {
    /// Every line fetched from the input, whatever happened to it
    pub lines_read: u64,
    /// Lines that produced an output row
    pub lines_emitted: u64,
    /// Blank and comment lines
    pub lines_skipped: u64,
    /// Candidate lines with fewer than six fields
    pub lines_dropped: u64,
    /// Output size in bytes, BOM and header included
    pub bytes_written: u64,
}

impl ConversionStats {
    pub fn has_data(&self) -> bool {
        self.lines_emitted > 0
    }
}

/// Outcome of a successful file conversion
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionReport {
    pub input_path: PathBuf,
    /// Path actually written, after extension normalization
    pub output_path: PathBuf,
    pub stats: ConversionStats,
}

impl ConversionReport {
    /// Confirmation text shown to the user after a successful run
    pub fn success_message(&self) -> String {
        format!(
            "File converted successfully!\n\
             Saved as: {}\n\
             Size: {} bytes\n\
             Data rows: {}\n\n\
             When opening in a spreadsheet application:\n\
             1. Choose 'All files (*.*)'\n\
             2. Set the encoding to UTF-8\n\
             3. Choose ';' as the delimiter",
            self.output_path.display(),
            self.stats.bytes_written,
            self.stats.lines_emitted
        )
    }
}

/// Flat success flag plus human-readable message, as handed to a UI shell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionResult {
    pub success: bool,
    pub message: String,
}

impl ConversionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
