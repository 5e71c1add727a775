//! Blocking HTTP client for the GitHub Contents API.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Config, DEFAULT_API_URL, RepoRef};
use crate::error::{GhbinError, Result};

const USER_AGENT: &str = "ghbin-cli";

/// One content record as returned by the contents endpoint. Directory
/// listings return these without the `content` blob.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// The two shapes `GET /repos/{owner}/{repo}/contents/{path}` can take:
/// a single file record, or a listing of directory entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RemoteContent {
    Dir(Vec<ContentItem>),
    File(ContentItem),
}

#[derive(Debug, Serialize)]
struct PutContentRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl ContentItem {
    /// Decode the transport-encoded content blob to raw bytes. GitHub ships
    /// file content as base64 with embedded newlines.
    pub fn decode_content(&self) -> Result<Vec<u8>> {
        let Some(blob) = self.content.as_deref() else {
            return Err(GhbinError::Decode(format!(
                "no content returned for {}",
                self.path
            )));
        };
        match self.encoding.as_deref() {
            Some("base64") | None => {
                let compact: String = blob.chars().filter(|c| !c.is_whitespace()).collect();
                STANDARD
                    .decode(compact)
                    .map_err(|err| GhbinError::Decode(format!("{}: {err}", self.path)))
            }
            Some(other) => Err(GhbinError::Decode(format!(
                "unsupported encoding '{other}' for {}",
                self.path
            ))),
        }
    }
}

/// Client for the GitHub Contents API, authenticated with a personal access
/// token. The base URL is injectable so tests can run against a mock server.
pub struct GitHubClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(base_url: Option<&str>, token: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token: token.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Some(&config.api_url), &config.token)
    }

    /// Get the content or listing at a path. A 404 is a `NotFound` error.
    pub fn get_content(&self, repo: &RepoRef, path: &str) -> Result<RemoteContent> {
        self.find_content(repo, path)?
            .ok_or_else(|| GhbinError::NotFound(format!("{repo}: {path}")))
    }

    /// Like [`get_content`](Self::get_content), but maps a 404 to `None`.
    /// The upload flow uses this as its existence probe.
    pub fn find_content(&self, repo: &RepoRef, path: &str) -> Result<Option<RemoteContent>> {
        let url = self.contents_url(repo, path);
        debug!(%repo, path, "GET contents");
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&self.token)
            .send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(api_error(response));
        }
        let content = response.json::<RemoteContent>()?;
        Ok(Some(content))
    }

    /// Create a file at a path that has no existing content.
    pub fn create_file(
        &self,
        repo: &RepoRef,
        path: &str,
        content: &[u8],
        message: &str,
    ) -> Result<()> {
        debug!(%repo, path, bytes = content.len(), "PUT contents (create)");
        self.put_contents(repo, path, content, message, None)
    }

    /// Update an existing file in place. `sha` is the file's current revision
    /// marker; GitHub rejects the write if the file changed since it was read.
    pub fn update_file(
        &self,
        repo: &RepoRef,
        path: &str,
        content: &[u8],
        message: &str,
        sha: &str,
    ) -> Result<()> {
        debug!(%repo, path, sha, bytes = content.len(), "PUT contents (update)");
        self.put_contents(repo, path, content, message, Some(sha))
    }

    fn put_contents(
        &self,
        repo: &RepoRef,
        path: &str,
        content: &[u8],
        message: &str,
        sha: Option<&str>,
    ) -> Result<()> {
        let url = self.contents_url(repo, path);
        let request = PutContentRequest {
            message,
            content: STANDARD.encode(content),
            sha,
        };
        let response = self
            .client
            .put(&url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&self.token)
            .json(&request)
            .send()?;
        if !response.status().is_success() {
            return Err(api_error(response));
        }
        Ok(())
    }

    fn contents_url(&self, repo: &RepoRef, path: &str) -> String {
        let encoded = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/repos/{}/{}/contents/{encoded}",
            self.base_url,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.name)
        )
    }
}

fn api_error(response: reqwest::blocking::Response) -> GhbinError {
    let status = response.status().as_u16();
    let message = response
        .json::<ApiErrorBody>()
        .map(|body| body.message)
        .unwrap_or_default();
    GhbinError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_item(content: Option<&str>, encoding: Option<&str>) -> ContentItem {
        ContentItem {
            kind: "file".to_string(),
            name: "a.txt".to_string(),
            path: "notes/a.txt".to_string(),
            sha: "abc123".to_string(),
            content: content.map(String::from),
            encoding: encoding.map(String::from),
        }
    }

    #[test]
    fn decode_content_handles_wrapped_base64() {
        // "buy milk" split across lines the way the API returns long blobs
        let item = file_item(Some("YnV5\nIG1p\nbGs=\n"), Some("base64"));
        assert_eq!(item.decode_content().unwrap(), b"buy milk");
    }

    #[test]
    fn decode_content_rejects_missing_blob() {
        let item = file_item(None, Some("base64"));
        assert!(matches!(
            item.decode_content(),
            Err(GhbinError::Decode(_))
        ));
    }

    #[test]
    fn decode_content_rejects_unknown_encoding() {
        let item = file_item(Some("YnV5"), Some("utf-7"));
        assert!(matches!(
            item.decode_content(),
            Err(GhbinError::Decode(_))
        ));
    }

    #[test]
    fn remote_content_parses_file_and_listing() {
        let file: RemoteContent = serde_json::from_str(
            r#"{"type":"file","name":"a.txt","path":"a.txt","sha":"s","content":"","encoding":"base64"}"#,
        )
        .unwrap();
        assert!(matches!(file, RemoteContent::File(_)));

        let listing: RemoteContent = serde_json::from_str(
            r#"[{"type":"dir","name":"sub","path":"notes/sub","sha":"t"}]"#,
        )
        .unwrap();
        match listing {
            RemoteContent::Dir(entries) => assert_eq!(entries.len(), 1),
            RemoteContent::File(_) => panic!("expected listing"),
        }
    }

    #[test]
    fn contents_url_encodes_segments() {
        let client = GitHubClient::new(Some("https://api.example.com/"), "t");
        let repo = RepoRef {
            owner: "owner".to_string(),
            name: "repo".to_string(),
        };
        assert_eq!(
            client.contents_url(&repo, "notes/my file.txt"),
            "https://api.example.com/repos/owner/repo/contents/notes/my%20file.txt"
        );
    }
}
