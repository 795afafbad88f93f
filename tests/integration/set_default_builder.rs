//! Integration tests for `builder-inspect set-default-builder`.

use predicates::prelude::*;

use super::TestEnv;

#[test]
fn test_set_default_builder_updates_config() {
    let env = TestEnv::new();
    env.command()
        .args(["set-default-builder", "some/image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Builder 'some/image' is now the default builder"));

    let config = env.read_config();
    assert!(config.contains("default-builder = \"some/image\""));
    assert!(config.contains("first/local"));

    env.command()
        .arg("inspect-builder")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Inspecting default builder: 'some/image'\n"));
}

#[test]
fn test_set_default_builder_with_config_flag() {
    let env = TestEnv::new();
    let other = env.path().join("nested").join("other.toml");

    env.command()
        .args(["set-default-builder", "heroku/buildpacks:18", "--config"])
        .arg(&other)
        .assert()
        .success();

    let written = std::fs::read_to_string(&other).unwrap();
    assert!(written.contains("default-builder = \"heroku/buildpacks:18\""));
    assert!(!env.read_config().contains("heroku"));
    assert!(env.config_path().exists());
}
