use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(dir.path(), &["init"]).assert().success();
    run_git_command(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"])
        .assert()
        .success();

    dir
}

/// A repository whose `main` branch holds four linear commits
#[fixture]
pub fn repository_with_linear_history(repository_dir: TempDir) -> TempDir {
    for i in 1..=4 {
        commit_random_file(repository_dir.path(), &format!("commit {}", i));
    }

    repository_dir
}

/// Write a fresh random file and commit it
pub fn commit_random_file(dir: &Path, message: &str) {
    let file_name = format!("{}_{}.txt", Word().fake::<String>(), message.len());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    let file_path = dir.join(&file_name);

    std::fs::write(&file_path, &file_content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_path, e));

    run_git_command(dir, &["add", "."]).assert().success();
    git_commit(dir, message).assert().success();
}

pub fn run_hop_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("hop").expect("Failed to find hop binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
    cmd
}

pub fn git_checkout(dir: &Path, target: &str) {
    run_git_command(dir, &["checkout", target]).assert().success();
}

/// Commit IDs of a branch, oldest first
pub fn branch_commit_ids(dir: &Path, branch: &str) -> Vec<String> {
    let output = run_git_command(dir, &["log", "--reverse", "--pretty=%H", branch])
        .output()
        .expect("Failed to list commits");

    String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in git log output")
        .lines()
        .map(str::to_string)
        .collect()
}

/// The commit ID HEAD currently points at
pub fn head_commit_id(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "HEAD"])
        .output()
        .expect("Failed to resolve HEAD");

    String::from_utf8(output.stdout)
        .expect("Invalid utf-8 in rev-parse output")
        .trim()
        .to_string()
}
