use std::fs;
use std::path::Path;

use assert_cmd::Command;
use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use predicates::prelude::*;
use tempfile::TempDir;

fn prdraft(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prdraft").unwrap();
    cmd.env("PRDRAFT_CONFIG_DIR", config_home)
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn commit(repo: &Repository, dir: &Path, name: &str, message: &str) -> Oid {
    fs::write(dir.join(name), format!("{}\n", name)).unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Repository on `master` with `origin/master` at the root commit
fn repo_with_master(dir: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("master");
    let repo = Repository::init_opts(dir, &opts).unwrap();
    let root = commit(&repo, dir, "README.md", "initial");
    repo.reference("refs/remotes/origin/master", root, true, "test")
        .unwrap();
    repo
}

fn checkout_new_branch(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch(name, &head, false).unwrap();
    repo.set_head(&format!("refs/heads/{}", name)).unwrap();
}

#[test]
fn help_lists_subcommands() {
    let config = TempDir::new().unwrap();
    prdraft(config.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn generate_outside_repository_fails() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    prdraft(config.path())
        .args(["generate", "--prompt-only", "-C"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn generate_on_base_branch_fails() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    repo_with_master(dir.path());

    prdraft(config.path())
        .args(["generate", "--prompt-only", "-C"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Currently on the 'master' branch"));
}

#[test]
fn generate_prompt_only_renders_template() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let repo = repo_with_master(dir.path());
    checkout_new_branch(&repo, "ABC-5-add-x");
    commit(&repo, dir.path(), "x.txt", "add x");
    commit(&repo, dir.path(), "y.txt", "add y");

    let template = config.path().join("template.md");
    fs::write(
        &template,
        "{jiraTicket} into {targetBranch}\n{commitMessages}\n{jiraTicket}",
    )
    .unwrap();

    prdraft(config.path())
        .args(["generate", "--prompt-only", "-C"])
        .arg(dir.path())
        .arg("--template-file")
        .arg(&template)
        .assert()
        .success()
        .stdout("ABC-5 into origin/master\nadd y\nadd x\n{jiraTicket}\n");
}

#[test]
fn generate_without_template_fails_after_git_checks() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let repo = repo_with_master(dir.path());
    checkout_new_branch(&repo, "feature/login-fix");
    commit(&repo, dir.path(), "login.rs", "fix login");

    prdraft(config.path())
        .args(["generate", "-C"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("PR template is not set"));
}

#[test]
fn template_set_and_show() {
    let config = TempDir::new().unwrap();
    let template = config.path().join("t.md");
    fs::write(&template, "## {currentBranch}\n").unwrap();

    prdraft(config.path())
        .args(["template", "set"])
        .arg(&template)
        .assert()
        .success();

    prdraft(config.path())
        .args(["template", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## {currentBranch}"));
}
