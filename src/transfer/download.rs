//! Download flow: reproduce a remote file or directory subtree on disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::RepoRef;
use crate::error::{GhbinError, Result};
use crate::github::{ContentItem, GitHubClient, RemoteContent};

/// Download the remote item at `path` into `dest` (the CLI passes the
/// current working directory). Files land under their base name; directory
/// subtrees are reproduced relative to `dest`.
pub fn download(client: &GitHubClient, repo: &RepoRef, path: &str, dest: &Path) -> Result<()> {
    match client.get_content(repo, path)? {
        RemoteContent::File(item) if item.kind == "file" => {
            fs::create_dir_all(dest)?;
            write_file(&item, dest)
        }
        RemoteContent::File(item) => Err(GhbinError::UnknownContentKind(item.kind)),
        RemoteContent::Dir(entries) => {
            fs::create_dir_all(dest)?;
            download_directory(client, repo, path, &entries, dest)
        }
    }
}

/// Decode a file record and write it under its base name, overwriting any
/// existing local file. `fs::write` leaves the file non-executable.
fn write_file(item: &ContentItem, dest: &Path) -> Result<()> {
    let bytes = item.decode_content()?;
    let local = dest.join(&item.name);
    fs::write(&local, bytes)?;
    info!(path = %item.path, local = %local.display(), "wrote file");
    println!("Downloaded file: {}", item.name);
    Ok(())
}

/// Walk a directory listing depth-first in the order the API returned it.
/// Entries that are neither files nor directories are skipped.
fn download_directory(
    client: &GitHubClient,
    repo: &RepoRef,
    dir_path: &str,
    entries: &[ContentItem],
    dest: &Path,
) -> Result<()> {
    for entry in entries {
        match entry.kind.as_str() {
            "file" => {
                // Listings omit content blobs; fetch the file itself.
                let RemoteContent::File(item) = client.get_content(repo, &entry.path)? else {
                    return Err(GhbinError::UnknownContentKind(format!(
                        "expected a file at {}",
                        entry.path
                    )));
                };
                write_file(&item, dest)?;
            }
            "dir" => {
                let sub = dest.join(&entry.name);
                fs::create_dir_all(&sub)?;
                let RemoteContent::Dir(children) = client.get_content(repo, &entry.path)? else {
                    return Err(GhbinError::UnknownContentKind(format!(
                        "expected a directory at {}",
                        entry.path
                    )));
                };
                download_directory(client, repo, &entry.path, &children, &sub)?;
            }
            _ => {}
        }
    }

    println!("Downloaded directory: {dir_path}");
    Ok(())
}
