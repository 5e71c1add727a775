//! Environment-backed configuration.
//!
//! Two settings are required out of band: a GitHub personal access token and
//! the `owner/repo` target. Both are read once at startup; a missing value is
//! a fatal configuration error before any remote call is attempted.

use crate::error::{GhbinError, Result};

/// Default GitHub API base URL. Overridable via `GHBIN_API_URL` so tests can
/// point the client at a local mock server.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const TOKEN_VAR: &str = "GHBIN_GITHUB_TOKEN";
const REPO_VAR: &str = "GHBIN_REPO";
const API_URL_VAR: &str = "GHBIN_API_URL";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub repo: RepoRef,
    pub api_url: String,
}

/// A parsed `owner/repo` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl Config {
    /// Load configuration from `GHBIN_GITHUB_TOKEN` and `GHBIN_REPO`.
    pub fn from_env() -> Result<Self> {
        let token = non_empty_var(TOKEN_VAR);
        let repo = non_empty_var(REPO_VAR);
        let (Some(token), Some(repo)) = (token, repo) else {
            return Err(GhbinError::Config(format!(
                "{TOKEN_VAR} and {REPO_VAR} environment variables must be set"
            )));
        };

        let repo = RepoRef::parse(&repo)?;
        let api_url = non_empty_var(API_URL_VAR)
            .map_or_else(|| DEFAULT_API_URL.to_string(), |url| {
                url.trim_end_matches('/').to_string()
            });

        Ok(Self { token, repo, api_url })
    }
}

impl RepoRef {
    /// Parse an `owner/repo` string. Exactly one separator, both sides
    /// non-empty; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split('/');
        let owner = parts.next().unwrap_or("").trim();
        let name = parts.next().unwrap_or("").trim();
        if owner.is_empty() || name.is_empty() || parts.next().is_some() {
            return Err(GhbinError::Config(format!(
                "invalid repo name format, expected 'owner/repo': {input}"
            )));
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
