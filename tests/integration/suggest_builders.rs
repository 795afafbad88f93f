//! Integration tests for `builder-inspect suggest-builders`.

use builder_inspect::builder::BuilderInfo;
use builder_inspect::provider::Catalog;
use builder_inspect::test_utils::CatalogFixture;
use predicates::prelude::*;

use super::TestEnv;

#[test]
fn test_suggest_builders_lists_all() {
    let env = TestEnv::new();
    env.command()
        .arg("suggest-builders")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Suggested builders:\n"))
        .stdout(predicate::str::contains("  Google:"))
        .stdout(predicate::str::contains("'heroku/buildpacks:18'"))
        .stdout(predicate::str::contains("'paketobuildpacks/builder:tiny'"))
        .stdout(predicate::str::ends_with(
            "\nTip: Learn more about a specific builder with:\n\tbuilder-inspect inspect-builder <builder-image>\n",
        ));
}

#[test]
fn test_suggest_builders_prefers_catalog_description() {
    let info = BuilderInfo {
        description: "Catalog description for heroku".to_string(),
        ..Default::default()
    };
    let fixture = CatalogFixture {
        catalog: Catalog::default().with_builder("heroku/buildpacks:18", None, Some(info)),
        ..CatalogFixture::sample()
    };
    let env = TestEnv::with_fixture(fixture);

    env.command()
        .arg("suggest-builders")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"'heroku/buildpacks:18' +Catalog description for heroku\n").unwrap())
        .stdout(predicate::str::contains("heroku-18 base image").not());
}

#[test]
fn test_suggest_builders_without_catalog() {
    let env = TestEnv::new();
    env.command()
        .arg("suggest-builders")
        .env("BUILDER_INSPECT_METADATA", env.path().join("nope.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Tiny base image"));
}
