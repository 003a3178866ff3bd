// crates/caesar-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaesarError>;

#[derive(Debug, Error)]
pub enum CaesarError {
    #[error("reference distribution error: {0}")]
    Reference(String),

    #[error("validation error: {0}")]
    Validation(String),
}
