//! Upload flow: deposit content as a file in the remote repository.
//!
//! An upload either creates a missing file, updates an existing one in place
//! using its current revision marker, or (with force-new) side-steps the
//! existing file by writing to a freshly generated random path.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::Rng;
use tracing::info;

use crate::config::RepoRef;
use crate::error::{GhbinError, Result};
use crate::github::{GitHubClient, RemoteContent};

/// Upload one content item to `join(target_dir, file_name)`.
///
/// Prints a `Created file:` or `Updated file:` line naming the resulting
/// remote path.
pub fn upload_content(
    client: &GitHubClient,
    repo: &RepoRef,
    file_name: &str,
    content: &[u8],
    message: &str,
    target_dir: &str,
    force_new: bool,
) -> Result<()> {
    let path = join_remote_path(target_dir, file_name);

    match client.find_content(repo, &path)? {
        None => {
            client.create_file(repo, &path, content, message)?;
            info!(%repo, path, "created remote file");
            println!("Created file: {path}");
        }
        Some(_) if force_new => {
            let path = join_remote_path(target_dir, &random_file_name());
            client.create_file(repo, &path, content, message)?;
            info!(%repo, path, "created remote file at fresh path");
            println!("Created file: {path}");
        }
        Some(_) => {
            // Re-fetch for the current revision marker rather than reusing
            // the probe result; the marker must match the object being
            // overwritten and the request count is observable via rate
            // limits, so it stays at two.
            let current = client.get_content(repo, &path)?;
            let RemoteContent::File(item) = current else {
                return Err(GhbinError::Input(format!(
                    "remote path is a directory: {path}"
                )));
            };
            client.update_file(repo, &path, content, message, &item.sha)?;
            info!(%repo, path, "updated remote file");
            println!("Updated file: {path}");
        }
    }

    Ok(())
}

/// Generate a random file name: 6 random bytes, URL-safe base64 (8 chars),
/// `.txt` suffix. Collisions are improbable, not impossible.
pub fn random_file_name() -> String {
    let mut bytes = [0u8; 6];
    rand::rng().fill(&mut bytes);
    format!("{}.txt", URL_SAFE.encode(bytes))
}

/// Join an optional target directory and a file name with `/`.
pub(crate) fn join_remote_path(target_dir: &str, file_name: &str) -> String {
    let dir = target_dir.trim_matches('/');
    if dir.is_empty() {
        file_name.to_string()
    } else {
        format!("{dir}/{file_name}")
    }
}
