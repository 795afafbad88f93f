//! Integration tests for `builder-inspect inspect-builder`.

use builder_inspect::config::Config;
use predicates::prelude::*;

use super::TestEnv;

fn remote_view() -> String {
    [
        "",
        "REMOTE:",
        "",
        "Description: Some remote description",
        "",
        "Created By:",
        "  Name: Pack CLI",
        "  Version: 1.2.3",
        "",
        "Trusted: No",
        "",
        "Stack:",
        "  ID: test.stack.id",
        "",
        "Lifecycle:",
        "  Version: 6.7.8",
        "  Buildpack APIs:",
        "    Deprecated: (none)",
        "    Supported: 1.2, 2.3",
        "  Platform APIs:",
        "    Deprecated: 0.1, 1.2",
        "    Supported: 4.5",
        "",
        "Run Images:",
        "  first/local     (user-configured)",
        "  second/local    (user-configured)",
        "  some/run-image",
        "  first/default",
        "  second/default",
        "",
        "Buildpacks:",
        "  ID                     VERSION                        HOMEPAGE",
        "  test.top.nested        test.top.nested.version        ",
        "  test.nested            test.nested.version            http://geocities.com/top-bp",
        "  test.bp.one            test.bp.one.version            http://geocities.com/cool-bp",
        "  test.bp.two            test.bp.two.version            ",
        "  test.bp.three          test.bp.three.version          ",
        "",
        "Detection Order:",
        " └ Group #1:",
        "    ├ test.top.nested@test.top.nested.version    ",
        "    │  └ Group #1:",
        "    │     ├ test.nested@test.nested.version    ",
        "    │     │  └ Group #1:",
        "    │     │     └ test.bp.one@test.bp.one.version    (optional)",
        "    │     └ test.bp.three@test.bp.three.version      (optional)",
        "    └ test.bp.two                                    (optional)",
        "",
    ]
    .join("\n")
}

#[test]
fn test_inspect_prints_remote_then_local() {
    let env = TestEnv::new();
    let output = env.command().args(["inspect-builder", "some/image"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected_start = format!("Inspecting builder: 'some/image'\n{}", remote_view());
    assert!(stdout.starts_with(&expected_start), "unexpected output:\n{stdout}");

    let local = &stdout[expected_start.len()..];
    assert!(local.starts_with("\nLOCAL:\n\nDescription: Some local description\n"));
    assert!(local.contains("  Name: Pack CLI\n  Version: 4.5.6\n"));
    assert!(local.contains("    Deprecated: 4.5, 6.7\n    Supported: 8.9, 10.11\n"));
    assert!(local.contains("  some/run-image\n  first/local-default\n  second/local-default\n"));
}

#[test]
fn test_inspect_default_builder() {
    let env = TestEnv::new();
    env.command()
        .arg("inspect-builder")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Inspecting default builder: 'default/builder'\n"))
        .stdout(predicate::str::contains("\nREMOTE:\n\nDescription: Some remote description\n"));
}

#[test]
fn test_inspect_without_default_builder_suggests() {
    let env = TestEnv::with_config(Config::default());
    env.command()
        .arg("inspect-builder")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "Please select a default builder with:\n\n\tbuilder-inspect set-default-builder <builder-image>\n",
        ))
        .stdout(predicate::str::contains("Suggested builders:"))
        .stdout(predicate::str::contains("'paketobuildpacks/builder:base'"))
        .stderr(predicate::str::contains("No default builder is configured"));
}

#[test]
fn test_inspect_unknown_builder_fails() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "missing/image"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Unable to find builder 'missing/image' locally or remotely.",
        ));
}

#[test]
fn test_inspect_remote_only() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "remote/only"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nLOCAL:\n(not present)\n"));
}

#[test]
fn test_inspect_depth_limits_tree() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "some/image", "--depth", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    │     ├ test.nested@test.nested.version        \n"))
        .stdout(predicate::str::contains("test.bp.one@").not());
}

#[test]
fn test_inspect_depth_zero_shows_root_nodes() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "some/image", "--depth", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    ├ test.top.nested@test.top.nested.version    \n"))
        .stdout(predicate::str::contains("    └ test.bp.two                                (optional)\n"))
        .stdout(predicate::str::contains("test.nested@").not());
}

#[test]
fn test_inspect_rejects_negative_depth() {
    let env = TestEnv::new();
    for depth in ["-1", "-7"] {
        env.command()
            .args(["inspect-builder", "some/image", "--depth", depth])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(format!("Invalid depth {depth}: depth must not be negative")));
    }
}

#[test]
fn test_inspect_marks_cycles() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "cyclic/image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nREMOTE:\n(not present)\n"))
        .stdout(predicate::str::contains("Group #2:"))
        .stdout(predicate::str::contains("test.top.nested@test.top.nested.version    [cyclic]"))
        .stdout(predicate::str::contains("test.nested@test.nested.version    [cyclic]"));
}

#[test]
fn test_inspect_bare_builder_warns() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "bare/image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buildpacks:\n  (none)\n"))
        .stdout(predicate::str::contains(
            "Warning: 'bare/image' has no buildpacks\n  Users must supply buildpacks from the host machine\n",
        ))
        .stdout(predicate::str::contains(
            "Warning: 'bare/image' does not specify a Lifecycle version\n",
        ));
}

#[test]
fn test_inspect_verbose_shows_mixins() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "inspect-builder", "some/image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Mixins:\n    mixin1\n"));
}

#[test]
fn test_inspect_trusted_builder_from_config() {
    let mut config = builder_inspect::test_utils::fixtures::trusting_config("some/image");
    config.default_builder = None;
    let env = TestEnv::with_config(config);
    env.command()
        .args(["inspect-builder", "some/image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trusted: Yes\n"));
}

#[test]
fn test_inspect_missing_catalog() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect-builder", "some/image", "--metadata"])
        .arg(env.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Metadata catalog not found"));
}
