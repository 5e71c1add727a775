use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhbinError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("unknown content type: {0}")]
    UnknownContentKind(String),

    #[error("Content decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, GhbinError>;
