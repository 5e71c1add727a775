//! Application context shared by command handlers.

use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;

/// Per-invocation context: resolved configuration plus the API client.
/// Built once before command dispatch; a missing token or repo fails here,
/// before any remote call.
pub struct AppContext {
    pub config: Config,
    pub client: GitHubClient,
}

impl AppContext {
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        let client = GitHubClient::from_config(&config);
        Ok(Self { config, client })
    }
}
