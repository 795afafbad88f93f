//! Sample builder metadata for tests
//!
//! The fixtures describe one builder shipping five buildpacks. Its root order
//! holds a single group with a nested meta-buildpack, whose own order holds a
//! second meta-buildpack:
//!
//! ```text
//! test.top.nested -> [test.nested -> [test.bp.one?], test.bp.three?]
//! test.bp.two?   (unversioned in the root order)
//! ```
//!
//! [`cyclic_builder_info`] rewires the layers so that `test.top.nested` and
//! `test.nested` reference each other.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::{
    ApiVersions, BuilderInfo, CreatorMetadata, LifecycleApis, LifecycleDescriptor,
};
use crate::config::{Config, RunImageMirrors, TrustedBuilder};
use crate::dist::{
    BuildpackIdentity, BuildpackInfo, BuildpackLayerInfo, BuildpackLayers, BuildpackRef, Group,
    Order, Stack,
};
use crate::provider::Catalog;
use crate::version::{ApiSet, ApiVersion};

const STACK_ID: &str = "test.stack.id";

fn id(id: &str, version: &str) -> BuildpackIdentity {
    BuildpackIdentity::new(id, version)
}

fn apis(versions: &[&str]) -> ApiSet {
    versions
        .iter()
        .map(|v| v.parse::<ApiVersion>().expect("fixture API versions are valid"))
        .collect()
}

fn meta_layer(order: Order, diff_id: &str) -> BuildpackLayerInfo {
    BuildpackLayerInfo {
        api: ApiVersion::new(0, 2),
        order,
        layer_diff_id: diff_id.to_string(),
        ..Default::default()
    }
}

fn component_layer(diff_id: &str) -> BuildpackLayerInfo {
    BuildpackLayerInfo {
        api: ApiVersion::new(0, 2),
        stacks: vec![Stack {
            id: STACK_ID.to_string(),
            mixins: Vec::new(),
        }],
        layer_diff_id: diff_id.to_string(),
        ..Default::default()
    }
}

/// The flat buildpack list, in builder order.
pub fn buildpacks() -> Vec<BuildpackInfo> {
    vec![
        BuildpackInfo::new("test.top.nested", "test.top.nested.version"),
        BuildpackInfo::new("test.nested", "test.nested.version")
            .with_homepage("http://geocities.com/top-bp"),
        BuildpackInfo::new("test.bp.one", "test.bp.one.version")
            .with_homepage("http://geocities.com/cool-bp"),
        BuildpackInfo::new("test.bp.two", "test.bp.two.version"),
        BuildpackInfo::new("test.bp.three", "test.bp.three.version"),
    ]
}

/// Root order: the nested meta-buildpack, then an optional unversioned ref.
pub fn order() -> Order {
    vec![Group::new(vec![
        BuildpackRef::required(id("test.top.nested", "test.top.nested.version")),
        BuildpackRef::optional(BuildpackIdentity::unversioned("test.bp.two")),
    ])]
}

/// Layer metadata for the three-level nesting.
pub fn buildpack_layers() -> BuildpackLayers {
    let mut nested = meta_layer(
        vec![Group::new(vec![BuildpackRef::optional(id("test.bp.one", "test.bp.one.version"))])],
        "sha256:test.nested.sha256",
    );
    nested.homepage = Some("http://geocities.com/top-bp".to_string());

    let mut bp_one = component_layer("sha256:test.bp.one.sha256");
    bp_one.homepage = Some("http://geocities.com/cool-bp".to_string());

    BuildpackLayers::new()
        .with(
            id("test.top.nested", "test.top.nested.version"),
            meta_layer(
                vec![Group::new(vec![
                    BuildpackRef::required(id("test.nested", "test.nested.version")),
                    BuildpackRef::optional(id("test.bp.three", "test.bp.three.version")),
                ])],
                "sha256:test.top.nested.sha256",
            ),
        )
        .with(id("test.nested", "test.nested.version"), nested)
        .with(id("test.bp.one", "test.bp.one.version"), bp_one)
        .with(
            id("test.bp.two", "test.bp.two.version"),
            component_layer("sha256:test.bp.two.sha256"),
        )
        .with(
            id("test.bp.three", "test.bp.three.version"),
            component_layer("sha256:test.bp.three.sha256"),
        )
}

fn mixins() -> Vec<String> {
    ["mixin1", "mixin2", "build:mixin3", "build:mixin4"].iter().map(ToString::to_string).collect()
}

/// Registry view of the sample builder.
pub fn remote_builder_info() -> BuilderInfo {
    BuilderInfo {
        description: "Some remote description".to_string(),
        stack: STACK_ID.to_string(),
        mixins: mixins(),
        run_image: "some/run-image".to_string(),
        run_image_mirrors: vec!["first/default".to_string(), "second/default".to_string()],
        buildpacks: buildpacks(),
        order: order(),
        buildpack_layers: buildpack_layers(),
        lifecycle: LifecycleDescriptor {
            version: Some(semver::Version::new(6, 7, 8)),
            apis: LifecycleApis {
                buildpack: ApiVersions {
                    deprecated: ApiSet::default(),
                    supported: apis(&["1.2", "2.3"]),
                },
                platform: ApiVersions {
                    deprecated: apis(&["0.1", "1.2"]),
                    supported: apis(&["4.5"]),
                },
            },
        },
        created_by: CreatorMetadata {
            name: "Pack CLI".to_string(),
            version: "1.2.3".to_string(),
        },
    }
}

/// Daemon view of the sample builder.
pub fn local_builder_info() -> BuilderInfo {
    BuilderInfo {
        description: "Some local description".to_string(),
        run_image_mirrors: vec![
            "first/local-default".to_string(),
            "second/local-default".to_string(),
        ],
        lifecycle: LifecycleDescriptor {
            version: Some(semver::Version::new(4, 5, 6)),
            apis: LifecycleApis {
                buildpack: ApiVersions {
                    deprecated: apis(&["4.5", "6.7"]),
                    supported: apis(&["8.9", "10.11"]),
                },
                platform: ApiVersions {
                    deprecated: ApiSet::default(),
                    supported: apis(&["7.8"]),
                },
            },
        },
        created_by: CreatorMetadata {
            name: "Pack CLI".to_string(),
            version: "4.5.6".to_string(),
        },
        ..remote_builder_info()
    }
}

/// Daemon view whose two meta-buildpacks reference each other.
///
/// The root order gains a second group starting at `test.nested`, so the
/// cycle is entered from both ends.
pub fn cyclic_builder_info() -> BuilderInfo {
    let mut nested = meta_layer(
        vec![Group::new(vec![BuildpackRef::required(id(
            "test.top.nested",
            "test.top.nested.version",
        ))])],
        "sha256:test.nested.sha256",
    );
    nested.homepage = Some("http://geocities.com/top-bp".to_string());

    let layers = BuildpackLayers::new()
        .with(
            id("test.top.nested", "test.top.nested.version"),
            meta_layer(
                vec![Group::new(vec![BuildpackRef::required(id(
                    "test.nested",
                    "test.nested.version",
                ))])],
                "sha256:test.top.nested.sha256",
            ),
        )
        .with(id("test.nested", "test.nested.version"), nested)
        .with(
            id("test.bp.two", "test.bp.two.version"),
            component_layer("sha256:test.bp.two.sha256"),
        );

    let mut order = order();
    order.push(Group::new(vec![BuildpackRef::required(id("test.nested", "test.nested.version"))]));

    BuilderInfo {
        buildpacks: vec![
            BuildpackInfo::new("test.top.nested", "test.top.nested.version"),
            BuildpackInfo::new("test.nested", "test.nested.version")
                .with_homepage("http://geocities.com/top-bp"),
            BuildpackInfo::new("test.bp.two", "test.bp.two.version"),
        ],
        order,
        buildpack_layers: layers,
        ..local_builder_info()
    }
}

/// A builder with nothing but a stack id.
pub fn bare_builder_info() -> BuilderInfo {
    BuilderInfo {
        stack: STACK_ID.to_string(),
        ..Default::default()
    }
}

/// Config mirroring the sample builder's run image locally.
pub fn sample_config() -> Config {
    Config {
        default_builder: Some("default/builder".to_string()),
        run_images: vec![RunImageMirrors {
            image: "some/run-image".to_string(),
            mirrors: vec!["first/local".to_string(), "second/local".to_string()],
        }],
        trusted_builders: Vec::new(),
    }
}

/// Sample config that additionally trusts `name`.
pub fn trusting_config(name: &str) -> Config {
    let mut config = sample_config();
    config.trusted_builders.push(TrustedBuilder {
        name: name.to_string(),
    });
    config
}

/// A metadata catalog plus config ready to be written into a test directory.
#[derive(Clone, Debug, Default)]
pub struct CatalogFixture {
    pub catalog: Catalog,
    pub config: Config,
}

impl CatalogFixture {
    /// `some/image` and `default/builder`, both with local and remote views.
    pub fn sample() -> Self {
        let catalog = Catalog::default()
            .with_builder(
                "some/image",
                Some(local_builder_info()),
                Some(remote_builder_info()),
            )
            .with_builder(
                "default/builder",
                Some(local_builder_info()),
                Some(remote_builder_info()),
            )
            .with_builder("remote/only", None, Some(remote_builder_info()))
            .with_builder("cyclic/image", Some(cyclic_builder_info()), None)
            .with_builder("bare/image", Some(bare_builder_info()), Some(bare_builder_info()));

        Self {
            catalog,
            config: sample_config(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Write `builders.json` and `config.toml` into `dir`.
    ///
    /// Returns `(catalog_path, config_path)`.
    pub fn write_to(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        let catalog_path = dir.join("builders.json");
        let json = serde_json::to_string_pretty(&self.catalog)?;
        fs::write(&catalog_path, json)
            .with_context(|| format!("Failed to write {}", catalog_path.display()))?;

        let config_path = dir.join("config.toml");
        let toml = toml::to_string_pretty(&self.config)?;
        fs::write(&config_path, toml)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok((catalog_path, config_path))
    }
}
