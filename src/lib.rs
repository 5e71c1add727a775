pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod github;
pub mod transfer;

pub use error::{GhbinError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
