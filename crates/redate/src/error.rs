//! Error types for the rephrasing pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedateError {
    /// No parser in the chain could interpret the text. The adapter should
    /// leave the original display text untouched.
    #[error("Unrecognized date: {0:?}")]
    Unrecognized(String),
}

pub type Result<T> = std::result::Result<T, RedateError>;
