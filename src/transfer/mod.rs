//! Upload and download flows.
//!
//! Both flows are strictly sequential per invocation: read input, call the
//! contents API, write output. No state survives past one command.

pub mod download;
pub mod upload;

pub use download::download;
pub use upload::{random_file_name, upload_content};
