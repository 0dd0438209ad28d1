use thiserror::Error;

pub type Result<T> = std::result::Result<T, CrlfeError>;

#[derive(Debug, Error)]
pub enum CrlfeError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("read error: {0}")]
    Read(std::io::Error),

    #[error("write error: {0}")]
    Write(std::io::Error),

    #[error("CRLF still present after write: {0}")]
    Unconverted(String),
}
