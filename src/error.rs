use std::fmt;
use std::path::PathBuf;

/// Errors that abort a telemetry log conversion
#[derive(Debug)]
pub enum ConvertError {
    /// Input path does not reference an existing file
    InputMissing(PathBuf),
    /// Input exists but could not be opened for reading
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Destination directory is absent and could not be created
    OutputDirUncreatable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Destination file could not be created or truncated
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Resolved output path points at the input file
    SameFile(PathBuf),
    /// Input was read completely but no line qualified as a data row
    EmptyResult,
    /// I/O errors while reading or writing mid-run
    Io(std::io::Error),
    /// Row writer errors
    Csv(csv::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InputMissing(path) => {
                write!(f, "Input file does not exist: {}", path.display())
            }
            ConvertError::InputUnreadable { path, source } => {
                write!(f, "Failed to open input file {}: {}", path.display(), source)
            }
            ConvertError::OutputDirUncreatable { path, source } => write!(
                f,
                "Failed to create output directory {}: {}",
                path.display(),
                source
            ),
            ConvertError::OutputUnwritable { path, source } => {
                write!(f, "Failed to create output file {}: {}", path.display(), source)
            }
            ConvertError::SameFile(path) => write!(
                f,
                "Output file would overwrite the input file: {}",
                path.display()
            ),
            ConvertError::EmptyResult => write!(
                f,
                "File contains no convertible data (only comments, blank or short lines)"
            ),
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
            ConvertError::Csv(err) => write!(f, "CSV write error: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InputUnreadable { source, .. }
            | ConvertError::OutputDirUncreatable { source, .. }
            | ConvertError::OutputUnwritable { source, .. } => Some(source),
            ConvertError::Io(err) => Some(err),
            ConvertError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_names_the_path() {
        let err = ConvertError::InputMissing(PathBuf::from("/data/session.txt"));
        assert_eq!(
            err.to_string(),
            "Input file does not exist: /data/session.txt"
        );
    }

    #[test]
    fn test_empty_result_message() {
        let message = ConvertError::EmptyResult.to_string();
        assert!(message.contains("no convertible data"));
    }

    #[test]
    fn test_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConvertError::OutputUnwritable {
            path: PathBuf::from("out.csv"),
            source: io,
        };
        assert!(err.source().is_some());
        assert!(ConvertError::EmptyResult.source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(ConvertError::from(io), ConvertError::Io(_)));
    }
}
