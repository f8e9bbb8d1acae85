use crate::conversion::transform_record;
use crate::error::{ConvertError, Result};
use crate::export::{resolve_output_path, RowWriter};
use crate::parser::line::{classify_line, LineClass};
use crate::parser::stream::LineStream;
use crate::types::{ConversionReport, ConversionStats};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Rows echoed at debug level at the start of each run
const DEBUG_SAMPLE_ROWS: u64 = 3;

/// Convert a telemetry log read from `reader` into CSV written to `writer`
///
/// Blank and comment lines are skipped, lines with fewer than six fields are
/// dropped, every other line becomes one output row. Returns
/// [`ConvertError::EmptyResult`] when no line produced a row; the header has
/// already been written to `writer` by then.
pub fn convert_stream<R: BufRead, W: Write>(reader: R, writer: W) -> Result<ConversionStats> {
    let mut lines = LineStream::new(reader);
    let mut rows = RowWriter::new(writer)?;
    let mut stats = ConversionStats::default();

    while let Some(line) = lines.next_line()? {
        match classify_line(&line) {
            class if class.is_skip() => stats.lines_skipped += 1,
            LineClass::Data(record) => {
                let fields = transform_record(&record);
                rows.write_row(&fields)?;

                if rows.rows_written() <= DEBUG_SAMPLE_ROWS {
                    debug!(
                        row = rows.rows_written(),
                        "Processed line: {}",
                        fields.join(";")
                    );
                }
            }
            _ => {
                stats.lines_dropped += 1;
                debug!(line = lines.lines_read(), "Dropping line with too few fields");
            }
        }
    }

    stats.lines_read = lines.lines_read();
    stats.lines_emitted = rows.rows_written();
    let (_, bytes_written) = rows.finish()?;
    stats.bytes_written = bytes_written;

    info!(
        lines_read = stats.lines_read,
        lines_emitted = stats.lines_emitted,
        lines_skipped = stats.lines_skipped,
        lines_dropped = stats.lines_dropped,
        "File processing completed"
    );

    if !stats.has_data() {
        return Err(ConvertError::EmptyResult);
    }
    Ok(stats)
}

/// Convert the log at `input_path` into a CSV file
///
/// `output_path` is normalized with [`resolve_output_path`] first; the
/// returned report carries the path that was actually written. Missing
/// output directories are created. If the run fails after the output file
/// was created, that file is removed again.
pub fn convert_file(input_path: &Path, output_path: &Path) -> Result<ConversionReport> {
    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        "Starting conversion"
    );

    if !input_path.exists() {
        return Err(ConvertError::InputMissing(input_path.to_path_buf()));
    }
    if input_path.is_dir() {
        return Err(ConvertError::InputUnreadable {
            path: input_path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "path is a directory"),
        });
    }

    let input_file = File::open(input_path).map_err(|source| ConvertError::InputUnreadable {
        path: input_path.to_path_buf(),
        source,
    })?;

    let csv_path = resolve_output_path(output_path);
    debug!(path = %csv_path.display(), "Resolved CSV output path");

    if is_same_file(input_path, &csv_path) {
        return Err(ConvertError::SameFile(csv_path));
    }

    ensure_parent_dir(&csv_path)?;

    let output_file = File::create(&csv_path).map_err(|source| ConvertError::OutputUnwritable {
        path: csv_path.clone(),
        source,
    })?;

    // Both handles are moved in and closed when this returns
    let outcome = convert_stream(BufReader::new(input_file), BufWriter::new(output_file));

    let stats = match outcome {
        Ok(stats) => stats,
        Err(err) => {
            if let Err(remove_err) = fs::remove_file(&csv_path) {
                warn!(
                    path = %csv_path.display(),
                    error = %remove_err,
                    "Failed to remove incomplete output file"
                );
            }
            return Err(err);
        }
    };

    info!(path = %csv_path.display(), bytes = stats.bytes_written, "CSV file saved");

    Ok(ConversionReport {
        input_path: input_path.to_path_buf(),
        output_path: csv_path,
        stats,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(output_dir) = path.parent() else {
        return Ok(());
    };
    if output_dir.as_os_str().is_empty() || output_dir.exists() {
        return Ok(());
    }

    debug!(dir = %output_dir.display(), "Output directory doesn't exist, creating");
    fs::create_dir_all(output_dir).map_err(|source| ConvertError::OutputDirUncreatable {
        path: absolute_or_given(output_dir),
        source,
    })
}

fn absolute_or_given(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

// Only an existing output can alias the input
fn is_same_file(input_path: &Path, output_path: &Path) -> bool {
    match (fs::canonicalize(input_path), fs::canonicalize(output_path)) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}
