use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed numeric token {token:?}")]
    MalformedToken { token: String },

    #[error("input ended while reading {expected}")]
    UnexpectedEndOfInput { expected: &'static str },

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
