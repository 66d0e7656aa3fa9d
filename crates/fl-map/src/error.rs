use thiserror::Error;

use fl_core::ConfigError;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot read map: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A structural rule broken by a specific line.
    #[error("line {line}: {source}")]
    Invalid { line: usize, source: ConfigError },

    /// A whole-map rule checked after the last line.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bad line pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type MapResult<T> = Result<T, MapError>;
