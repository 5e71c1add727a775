//! GitHub Contents API client.
//!
//! The remote repository is the sole durable store: uploads create or update
//! files through the contents endpoint, downloads read files and directory
//! listings back. Transport, encoding and pagination are GitHub's; this
//! module only consumes them.

pub mod client;

pub use client::{ContentItem, GitHubClient, RemoteContent};
