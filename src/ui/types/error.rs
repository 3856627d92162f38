use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected 6 positional arguments, found {0}")]
    ArgumentCount(usize),

    #[error("invalid value '{value}' for {name}")]
    InvalidValue {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("at least one split heuristic must be selected")]
    NoHeuristics,

    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
