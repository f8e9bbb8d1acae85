//! CSV output for normalized telemetry rows
//!
//! Contains the row writer that produces the spreadsheet-ready file
//! (BOM, fixed header, `;`-separated rows) and the helpers that decide
//! where that file ends up.

use crate::error::Result;
use crate::types::{FIELD_SEPARATOR, HEADER_FIELDS};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// UTF-8 byte order mark written before the header row
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options controlling where converted files are written
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Explicit output file; only meaningful for a single input
    pub output: Option<PathBuf>,
    /// Directory for output files (default: same as input file)
    pub output_dir: Option<PathBuf>,
    /// Replace output files that already exist
    pub overwrite: bool,
}

/// Map a requested output path to the path that is actually written
///
/// A `.xlsx` suffix (any case) becomes `.csv`, a `.csv` suffix is kept, and
/// anything else gets `.csv` appended.
pub fn resolve_output_path(requested: &Path) -> PathBuf {
    let Some(text) = requested.to_str() else {
        return resolve_by_extension(requested);
    };

    let lower = text.to_ascii_lowercase();
    if lower.ends_with(".xlsx") {
        PathBuf::from(format!("{}.csv", &text[..text.len() - ".xlsx".len()]))
    } else if lower.ends_with(".csv") {
        requested.to_path_buf()
    } else {
        PathBuf::from(format!("{text}.csv"))
    }
}

// Non-UTF-8 paths cannot be matched as text
fn resolve_by_extension(requested: &Path) -> PathBuf {
    let extension = requested
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") => requested.with_extension("csv"),
        Some("csv") => requested.to_path_buf(),
        _ => {
            let mut appended = OsString::from(requested.as_os_str());
            appended.push(".csv");
            PathBuf::from(appended)
        }
    }
}

/// Output path for an input file when the caller did not name one
///
/// Uses the input file name with a trailing `.txt` removed, plus `.csv`,
/// inside `output_dir` or next to the input.
pub fn default_output_path(input_path: &Path, options: &ConvertOptions) -> PathBuf {
    if let Some(ref output) = options.output {
        return output.clone();
    }

    let file_name = input_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("telemetry");
    let base_name = if file_name.to_ascii_lowercase().ends_with(".txt") {
        &file_name[..file_name.len() - ".txt".len()]
    } else {
        file_name
    };

    let output_dir = if let Some(ref dir) = options.output_dir {
        dir.as_path()
    } else {
        input_path.parent().unwrap_or(Path::new(""))
    };

    output_dir.join(format!("{base_name}.csv"))
}

/// Writes the BOM, the header row and one `;`-joined line per record
///
/// Fields are written exactly as given: no quoting, no escaping, `\n` as
/// the only terminator.
pub struct RowWriter<W: Write> {
    writer: csv::Writer<ByteCounter<W>>,
    rows_written: u64,
}

/// Counts bytes on their way to the underlying writer
struct ByteCounter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> Write for ByteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.count += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut counter = ByteCounter { inner, count: 0 };
        counter.write_all(UTF8_BOM)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(FIELD_SEPARATOR as u8)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .has_headers(false)
            .from_writer(counter);
        writer.write_record(HEADER_FIELDS)?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        self.writer
            .write_record(fields.iter().map(|field| field.as_ref().as_bytes()))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Data rows written so far, header excluded
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush everything and hand back the underlying writer together with
    /// the total number of bytes written, BOM and header included
    pub fn finish(self) -> Result<(W, u64)> {
        let mut counter = self
            .writer
            .into_inner()
            .map_err(|err| err.into_error())?;
        counter.flush()?;
        Ok((counter.inner, counter.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path() {
        assert_eq!(
            resolve_output_path(Path::new("report.xlsx")),
            PathBuf::from("report.csv")
        );
        assert_eq!(
            resolve_output_path(Path::new("out/Report.XLSX")),
            PathBuf::from("out/Report.csv")
        );
        assert_eq!(
            resolve_output_path(Path::new("report.csv")),
            PathBuf::from("report.csv")
        );
        assert_eq!(
            resolve_output_path(Path::new("REPORT.CSV")),
            PathBuf::from("REPORT.CSV")
        );
        assert_eq!(
            resolve_output_path(Path::new("report")),
            PathBuf::from("report.csv")
        );
        assert_eq!(
            resolve_output_path(Path::new("report.txt")),
            PathBuf::from("report.txt.csv")
        );
    }

    #[test]
    fn test_resolve_output_path_is_stable() {
        let once = resolve_output_path(Path::new("data/session.xlsx"));
        assert_eq!(resolve_output_path(&once), once);
    }

    #[test]
    fn test_default_output_path_next_to_input() {
        let options = ConvertOptions::default();
        assert_eq!(
            default_output_path(Path::new("/logs/session_01.txt"), &options),
            PathBuf::from("/logs/session_01.csv")
        );
        assert_eq!(
            default_output_path(Path::new("/logs/session_01.TXT"), &options),
            PathBuf::from("/logs/session_01.csv")
        );
        assert_eq!(
            default_output_path(Path::new("/logs/session.log"), &options),
            PathBuf::from("/logs/session.log.csv")
        );
        assert_eq!(
            default_output_path(Path::new("session.txt"), &options),
            PathBuf::from("session.csv")
        );
    }

    #[test]
    fn test_default_output_path_options() {
        let options = ConvertOptions {
            output_dir: Some(PathBuf::from("/tmp/converted")),
            ..Default::default()
        };
        assert_eq!(
            default_output_path(Path::new("/logs/a.txt"), &options),
            PathBuf::from("/tmp/converted/a.csv")
        );

        let options = ConvertOptions {
            output: Some(PathBuf::from("/tmp/explicit.xlsx")),
            output_dir: Some(PathBuf::from("/ignored")),
            overwrite: false,
        };
        assert_eq!(
            default_output_path(Path::new("/logs/a.txt"), &options),
            PathBuf::from("/tmp/explicit.xlsx")
        );
    }

    #[test]
    fn test_row_writer_output() {
        let mut buffer = Vec::new();
        let mut writer = RowWriter::new(&mut buffer).unwrap();
        writer.write_row(&["100", "12,340", "-3,5", "7,00", "0", "1"]).unwrap();
        writer.write_row(&["5", "1,0", "2,0", "3,0", "1", "0", "extra"]).unwrap();
        assert_eq!(writer.rows_written(), 2);
        let (_, bytes_written) = writer.finish().unwrap();
        assert_eq!(bytes_written, buffer.len() as u64);

        assert!(buffer.starts_with(UTF8_BOM));
        let text = std::str::from_utf8(&buffer[UTF8_BOM.len()..]).unwrap();
        assert_eq!(
            text,
            "Time_ms;PITCH;ROLL;YAW;Dizziness;Nystagmus\n\
             100;12,340;-3,5;7,00;0;1\n\
             5;1,0;2,0;3,0;1;0;extra\n"
        );
    }

    #[test]
    fn test_row_writer_never_quotes() {
        let mut buffer = Vec::new();
        let mut writer = RowWriter::new(&mut buffer).unwrap();
        writer
            .write_row(&["1", "\"quoted\"", "a b", "3", "x,y", ""])
            .unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("1;\"quoted\";a b;3;x,y;\n"));
    }

    #[test]
    fn test_header_only_output() {
        let mut buffer = Vec::new();
        RowWriter::new(&mut buffer).unwrap().finish().unwrap();
        assert_eq!(
            &buffer[..],
            "\u{feff}Time_ms;PITCH;ROLL;YAW;Dizziness;Nystagmus\n".as_bytes()
        );
    }
}
