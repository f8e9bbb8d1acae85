//! Telemetry CSV Library
//!
//! A Rust library for converting semicolon-delimited head-motion telemetry
//! logs (time, pitch, roll, yaw, dizziness and nystagmus flags) into CSV
//! files that open cleanly in spreadsheet applications using a comma as
//! decimal separator.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Print conversion reports as JSON from the CLI
//! - **`serde`**: Enable serialization/deserialization of report types
//!
//! # Quick Start
//!
//! Convert a file and show the outcome:
//! ```rust,no_run
//! use telemetry_csv::Converter;
//!
//! let mut converter = Converter::new();
//! let result = converter.convert("session.txt", "session.xlsx");
//! // Written as session.csv
//! println!("{}", result.message);
//! ```
//!
//! Convert in memory:
//! ```rust
//! use telemetry_csv::convert_stream;
//!
//! let input = "100;012.340;-003.5;7.00;0;1\n# comment\n";
//! let mut output = Vec::new();
//! let stats = convert_stream(input.as_bytes(), &mut output).unwrap();
//! assert_eq!(stats.lines_read, 2);
//! assert_eq!(stats.lines_emitted, 1);
//! assert!(String::from_utf8(output).unwrap().ends_with("100;12,340;-3,5;7,00;0;1\n"));
//! ```
//!
//! # Public API
//!
//! ## Conversion Functions
//! - [`Converter`] - Flat success/message interface with last-message state
//! - [`convert_file`] - Convert a file, returning a typed report or error
//! - [`convert_stream`] - Convert from any reader into any writer
//!
//! ## Field Rules
//! - [`strip_leading_zeros_integer`] - `Time_ms` column rule
//! - [`normalize_decimal`] - `PITCH`/`ROLL`/`YAW` column rule
//! - [`transform_field`] - Apply the rule for a [`ColumnRole`]
//!
//! ## Output Helpers
//! - [`resolve_output_path`] - `.xlsx` to `.csv` suffix normalization
//! - [`default_output_path`] - Output path derived from an input file
//! - [`RowWriter`] - BOM, header and `;`-joined rows

// Module declarations
pub mod conversion;
pub mod converter;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
pub use conversion::*;
pub use converter::*;
pub use error::*;
pub use export::*;
pub use parser::*;
pub use types::*;
