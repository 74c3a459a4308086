//! Error type for the fallible edges of palaver-core.
//!
//! The query layer itself is total; only configuration loading can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value {value:?} for setting `{key}`")]
    InvalidSetting { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
