// Error types for the fallible edges of the crate.
//
// Movement evaluation never fails: a candidate that cannot be decided is
// simply invalid. The only fallible surface is loading a `MovementConfig`
// from disk or from a JSON string.
//
// See also: `config.rs` for the loaders that return these errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read movement config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed movement config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
