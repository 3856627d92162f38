mod error;
mod experiment_config;
mod schema;

pub use error::ConfigError;
pub use experiment_config::{ExperimentConfig, USAGE, resolve_set};
pub use schema::{FieldKind, FieldSpec, field_specs};
