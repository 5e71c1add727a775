//! ghbin upload - Upload files or clipboard content to the repo

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::clipboard;
use crate::error::{GhbinError, Result};
use crate::transfer::{random_file_name, upload_content};

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path(s) to file(s) to upload
    #[arg(long, short = 'p')]
    pub path: Vec<PathBuf>,

    /// Upload content from clipboard
    #[arg(long, short = 'x')]
    pub clipboard: bool,

    /// Specify a filename for clipboard content
    #[arg(long, short = 'f')]
    pub file_name: Option<String>,

    /// Commit message
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Target directory in the repo
    #[arg(long, short = 'd')]
    pub target_dir: Option<String>,

    /// Create a new file if it already exists
    #[arg(long)]
    pub new: bool,
}

pub fn run(ctx: &AppContext, args: &UploadArgs) -> Result<()> {
    let message = args.message.as_deref().unwrap_or("");
    let target_dir = args.target_dir.as_deref().unwrap_or("");

    if args.clipboard {
        let content = clipboard::read_content()?;
        let file_name = args
            .file_name
            .clone()
            .unwrap_or_else(random_file_name);
        return upload_content(
            &ctx.client,
            &ctx.config.repo,
            &file_name,
            &content,
            message,
            target_dir,
            args.new,
        );
    }

    if args.path.is_empty() {
        return Err(GhbinError::Input(
            "at least one path must be provided".to_string(),
        ));
    }

    // Batch semantics: an unreadable file or a remote failure aborts the
    // remaining items; already-uploaded items are not rolled back.
    for path in &args.path {
        let content = fs::read(path).map_err(|err| {
            GhbinError::Input(format!("failed to read {}: {err}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                GhbinError::Input(format!("invalid file name: {}", path.display()))
            })?;
        upload_content(
            &ctx.client,
            &ctx.config.repo,
            file_name,
            &content,
            message,
            target_dir,
            args.new,
        )?;
    }

    Ok(())
}
