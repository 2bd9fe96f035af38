//! Integration tests for the pipeline CLI
//!
//! These tests build real git repositories and run `pipeline changed` against
//! them, covering every change mode, both subcommands and the exit codes.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use assert_cmd::cargo;
use common::git_repo::TempGitRepo;
use pipeline::core::models::ListResult;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a pipeline CLI command
fn cli() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("pipeline"));
    cmd.env_remove("GITHUB_OUTPUT").env("RUST_LOG", "warn");
    cmd
}

/// A repository on branch `feature` that added three files over two commits
fn feature_repo() -> TempGitRepo {
    let repo = TempGitRepo::new("feature");
    repo.commit_files(&["CHANGELOG.md", "vault/acl.go"], "initial");
    repo.commit_files(&["vault/activity_log_util_ent.go"], "add activity log util");
    repo.commit_files(&["vault/acl.go"], "modify acl");
    repo
}

fn list_json(repo: &TempGitRepo, args: &[&str]) -> ListResult {
    let out = cli()
        .args(["changed", "list", "--json"])
        .args(args)
        .current_dir(repo.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).unwrap()
}

// =============================================================================
// CLI SURFACE
// =============================================================================

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Classify the files changed"));
}

#[test]
fn test_version() {
    cli().arg("--version").assert().success().stdout(predicate::str::contains("pipeline"));
}

#[test]
fn test_usage_error_exits_one() {
    cli().args(["changed", "list", "--bogus"]).assert().code(1);
}

// =============================================================================
// LIST
// =============================================================================

#[test]
fn test_list_branch_mode_json() {
    let repo = feature_repo();
    let result = list_json(&repo, &["--branch", "feature"]);

    let files: Vec<_> = result.files.iter().map(|f| (f.path.as_str(), f.groups.to_string())).collect();
    assert_eq!(
        files,
        vec![
            ("CHANGELOG.md", "changelog".to_string()),
            ("vault/acl.go", "app".to_string()),
            ("vault/activity_log_util_ent.go", "app, enterprise".to_string()),
        ]
    );
    assert_eq!(result.groups.to_string(), "app, changelog, enterprise");
}

#[test]
fn test_list_branch_mode_plain() {
    let repo = feature_repo();
    cli()
        .args(["changed", "list", "--branch", "feature"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("CHANGELOG.md\nvault/acl.go\nvault/activity_log_util_ent.go\n");
}

#[test]
fn test_list_plain_with_groups() {
    let repo = feature_repo();
    cli()
        .args(["changed", "list", "--branch", "feature", "--groups"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PATH"))
        .stdout(predicate::str::contains("vault/activity_log_util_ent.go app, enterprise"));
}

#[test]
fn test_list_range_mode_includes_modified_and_deleted() {
    let repo = TempGitRepo::new("main");
    repo.commit_files(&["README.md", "vault/acl.go", "enos/main.tf"], "base");
    repo.checkout_new("feature");
    repo.commit_files(&["ui/a.js"], "add ui");
    repo.commit_files(&["vault/acl.go"], "modify acl");
    repo.commit_removal("README.md", "drop readme");

    let result = list_json(&repo, &["--range", "main..feature"]);
    assert_eq!(result.files.paths(), vec!["README.md", "ui/a.js", "vault/acl.go"]);
    assert_eq!(result.groups.to_string(), "app, docs, ui");
}

#[test]
fn test_list_commit_mode_only_that_commit() {
    let repo = TempGitRepo::new("main");
    repo.commit_files(&["go.mod", "go.sum"], "toolchain");
    repo.commit_files(&["helper/identity/mfa/types.proto", "website/content/index.mdx"], "docs and proto");
    let sha = repo.rev_parse("HEAD~1");

    let result = list_json(&repo, &["--commit", &sha]);
    assert_eq!(result.files.paths(), vec!["go.mod", "go.sum"]);
    assert_eq!(result.groups.to_string(), "app, gotoolchain");

    let result = list_json(&repo, &["--commit", "HEAD"]);
    assert_eq!(result.files.paths(), vec!["helper/identity/mfa/types.proto", "website/content/index.mdx"]);
    assert_eq!(result.groups.to_string(), "docs, proto");
}

#[test]
fn test_list_non_ascii_path_is_unquoted() {
    let repo = TempGitRepo::new("main");
    repo.commit_files(&["vault/café_ent.go"], "accented");

    let result = list_json(&repo, &["--commit", "HEAD"]);
    assert_eq!(result.files.paths(), vec!["vault/café_ent.go"]);
    assert_eq!(result.groups.to_string(), "app, enterprise");

    cli()
        .args(["changed", "list", "--branch", "main"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("vault/café_ent.go\n");
}

#[test]
fn test_list_path_with_trailing_space_is_kept() {
    let repo = TempGitRepo::new("main");
    repo.commit_files(&["vault/trail .go "], "spaced");

    let result = list_json(&repo, &["--commit", "HEAD"]);
    assert_eq!(result.files.paths(), vec!["vault/trail .go "]);
}

#[test]
fn test_list_repo_flag_selects_checkout() {
    let repo = feature_repo();
    let elsewhere = TempDir::new().unwrap();
    cli()
        .args(["changed", "list", "--commit", "HEAD", "-C"])
        .arg(repo.path())
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout("vault/acl.go\n");
}

#[test]
fn test_list_github_output_slim_shape() {
    let repo = TempGitRepo::new("main");
    repo.commit_files(&["ui/a.js", "changelog/1.txt"], "changes");
    let out_dir = TempDir::new().unwrap();
    let out_file = out_dir.path().join("github_output");

    cli()
        .args(["changed", "list", "--commit", "HEAD", "--github-output"])
        .env("GITHUB_OUTPUT", &out_file)
        .current_dir(repo.path())
        .assert()
        .success();

    let content = std::fs::read_to_string(&out_file).unwrap();
    assert_eq!(content, "list={\"files\":[\"changelog/1.txt\",\"ui/a.js\"],\"groups\":[\"changelog\",\"ui\"]}\n");
}

#[test]
fn test_list_github_output_requires_env() {
    let repo = feature_repo();
    cli()
        .args(["changed", "list", "--commit", "HEAD", "--github-output"])
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_OUTPUT"));
}

// =============================================================================
// CONFIGURATION AND VCS ERRORS
// =============================================================================

#[test]
fn test_ambiguous_mode_fails_before_git() {
    // Not a git repository: reaching git would produce a different error.
    let temp = TempDir::new().unwrap();
    cli()
        .args(["changed", "list", "--branch", "feature", "--range", "main..feature"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only one of branch, range, or commit"));
}

#[test]
fn test_no_mode_fails() {
    let temp = TempDir::new().unwrap();
    cli()
        .args(["changed", "list"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("one of branch, range, or commit is required"))
        .stderr(predicate::str::contains("pipeline changed --help"));
}

#[test]
fn test_vcs_failure_reports_command() {
    let repo = feature_repo();
    cli()
        .args(["changed", "list", "--commit", "does-not-exist"])
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git -c core.quotePath=false show does-not-exist --pretty= --name-only"))
        .stderr(predicate::str::contains("commit does-not-exist"))
        .stderr(predicate::str::contains("pipeline changed --help").not());
}
