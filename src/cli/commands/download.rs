//! ghbin download - Download a file or directory from the repo

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::transfer::download;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Path to file or directory to download
    #[arg(long, short = 'p', required = true)]
    pub path: String,

    /// Local destination directory (default: current directory)
    #[arg(long, short = 'o', default_value = ".")]
    pub out_dir: std::path::PathBuf,
}

pub fn run(ctx: &AppContext, args: &DownloadArgs) -> Result<()> {
    download(&ctx.client, &ctx.config.repo, &args.path, &args.out_dir)
}
