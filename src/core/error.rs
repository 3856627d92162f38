use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while building schemas, instances and datasets.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("class index {class_index} is out of range for {attributes} attributes")]
    ClassIndexOutOfRange {
        class_index: usize,
        attributes: usize,
    },

    #[error("unknown class attribute '{0}'")]
    UnknownClassAttribute(String),

    #[error("expected {expected} values, found {found}")]
    WidthMismatch { expected: usize, found: usize },

    #[error("{path}:{line}: expected {expected} values, found {found}")]
    RowWidth {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: malformed CSV record")]
    Csv {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("{0} has no header line")]
    MissingHeader(PathBuf),

    #[error("instance does not conform to the dataset header '{0}'")]
    HeaderMismatch(String),

    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
