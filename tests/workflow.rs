#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use project_manager::defaults::EngineDefaults;
use project_manager::scaffold::{create_new_project, NewProjectOptions};
use project_manager::update::update_engine_for_project;
use project_manager::utils::command::ShellRunner;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "user.name=Test User", "-c", "user.email=test@test.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Local stand-in for the upstream engine repository, on a `master` branch.
fn init_engine_repo(root: &Path) -> PathBuf {
    let engine = root.join("engine-upstream");
    fs::create_dir_all(&engine).unwrap();
    git(&engine, &["init"]);
    git(&engine, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    fs::write(engine.join("CMakeLists.txt"), "cmake_minimum_required(VERSION 3.20)\n").unwrap();
    git(&engine, &["add", "."]);
    git(&engine, &["commit", "-m", "Engine initial commit"]);
    engine
}

fn create_project(root: &Path, engine: &Path) -> PathBuf {
    let workspace = root.join("workspace");
    fs::create_dir_all(&workspace).unwrap();

    let options = NewProjectOptions::new(&workspace, templates_root())
        .with_engine_repo(format!("file://{}", engine.display()));
    let report = create_new_project("MyGame", &options, &mut ShellRunner).unwrap();

    let project = workspace.join("MyGame");
    assert_eq!(PathBuf::from(report.project_path), project);

    git(&project, &["config", "user.name", "Test User"]);
    git(&project, &["config", "user.email", "test@test.com"]);
    project
}

#[test]
fn new_project_is_rebranded_and_populated() {
    let root = TempDir::new().unwrap();
    let engine = init_engine_repo(root.path());
    let project = create_project(root.path(), &engine);

    assert_eq!(
        fs::read_to_string(project.join("engine_settings.cmake")).unwrap(),
        "set(GAME_PROJECT_NAME \"MyGame\")\n"
    );
    assert!(project.join("CMakeLists.txt").is_file());
    assert!(project.join("src/MyGame/src/main.cpp").is_file());
    assert!(project.join("src/MyGame_lib/src/MyGameInstance.h").is_file());
    assert!(project.join("src/MyGame_lib/src/node/MyCharacterNode.cpp").is_file());
    assert!(project.join("src/MyGame_lib/public/MyGameInstance.h").is_file());
    assert!(project.join("src/MyGame_tests/src/main.cpp").is_file());
    assert!(!root.path().join("workspace/low-end-engine").exists());

    assert_eq!(git(&project, &["rev-parse", "--abbrev-ref", "HEAD"]), "master");
    assert!(git(&project, &["branch", "--list", "engine"]).contains("engine"));
    assert_eq!(git(&project, &["remote"]), "origin_engine");
}

#[test]
fn update_without_upstream_changes_leaves_tree_clean() {
    let root = TempDir::new().unwrap();
    let engine = init_engine_repo(root.path());
    let project = create_project(root.path(), &engine);

    git(&project, &["add", "."]);
    git(&project, &["commit", "-m", "First commit of the game"]);

    let defaults = EngineDefaults::default();
    for _ in 0..2 {
        update_engine_for_project(&project, &defaults, &mut ShellRunner).unwrap();
        assert_eq!(git(&project, &["status", "--porcelain"]), "");
        assert_eq!(git(&project, &["rev-parse", "--abbrev-ref", "HEAD"]), "master");
    }
}

#[test]
fn update_stages_upstream_changes_without_committing() {
    let root = TempDir::new().unwrap();
    let engine = init_engine_repo(root.path());
    let project = create_project(root.path(), &engine);

    git(&project, &["add", "."]);
    git(&project, &["commit", "-m", "First commit of the game"]);

    fs::write(engine.join("engine_update.txt"), "new engine feature\n").unwrap();
    git(&engine, &["add", "."]);
    git(&engine, &["commit", "-m", "Engine update"]);

    update_engine_for_project(&project, &EngineDefaults::default(), &mut ShellRunner).unwrap();

    assert_eq!(git(&project, &["rev-parse", "--abbrev-ref", "HEAD"]), "master");
    assert_eq!(git(&project, &["log", "-1", "--format=%s"]), "First commit of the game");
    assert_eq!(
        git(&project, &["diff", "--cached", "--name-only"]),
        "engine_update.txt"
    );
    assert_eq!(
        git(&project, &["log", "-1", "--format=%s", "engine"]),
        "Engine update"
    );
}

#[test]
fn update_of_missing_project_fails() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nope");

    let err = update_engine_for_project(&missing, &EngineDefaults::default(), &mut ShellRunner)
        .unwrap_err();

    assert_eq!(err.code.as_str(), "project.path_not_found");
}
