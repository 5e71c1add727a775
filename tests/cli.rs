use assert_cmd::Command;
use predicates::prelude::*;

fn ghbin() -> Command {
    let mut cmd = Command::cargo_bin("ghbin").unwrap();
    cmd.env_remove("GHBIN_GITHUB_TOKEN")
        .env_remove("GHBIN_REPO")
        .env_remove("GHBIN_API_URL");
    cmd
}

#[test]
fn test_cli_help() {
    ghbin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    ghbin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_upload_requires_config() {
    ghbin()
        .args(["upload", "--path", "somefile.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "GHBIN_GITHUB_TOKEN and GHBIN_REPO environment variables must be set",
        ));
}

#[test]
fn test_download_requires_config() {
    ghbin()
        .args(["download", "--path", "notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "GHBIN_GITHUB_TOKEN and GHBIN_REPO environment variables must be set",
        ));
}

#[test]
fn test_invalid_repo_format_rejected() {
    ghbin()
        .env("GHBIN_GITHUB_TOKEN", "token")
        .env("GHBIN_REPO", "not-a-repo")
        .args(["upload", "--path", "somefile.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repo name format"));
}

#[test]
fn test_upload_requires_a_source() {
    // Config is valid, but neither --path nor --clipboard was given; the
    // command must fail before any remote call.
    ghbin()
        .env("GHBIN_GITHUB_TOKEN", "token")
        .env("GHBIN_REPO", "owner/repo")
        .arg("upload")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one path must be provided"));
}

#[test]
fn test_upload_unreadable_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    ghbin()
        .env("GHBIN_GITHUB_TOKEN", "token")
        .env("GHBIN_REPO", "owner/repo")
        .args(["upload", "--path"])
        .arg(dir.path().join("does-not-exist.txt"))
        .assert()
        .failure()
        // The error names the file that aborted the batch.
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn test_download_requires_path_flag() {
    ghbin()
        .env("GHBIN_GITHUB_TOKEN", "token")
        .env("GHBIN_REPO", "owner/repo")
        .arg("download")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn test_subcommand_aliases() {
    ghbin()
        .args(["u", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload a file or clipboard content"));
    ghbin()
        .args(["dl", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Download a file or directory"));
}
