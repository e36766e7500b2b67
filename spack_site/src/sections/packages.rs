//! `packages.yaml`: provider preferences, compiler preference, and external
//! package definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::{Mapping, SiteSection, rooted};
use crate::{AutoMap, override_marker};

/// A virtual package provider, such as `mpi` provided by `openmpi@4.1.1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSpec {
    /// Virtual package name (`mpi`, `blas`, `lapack`).
    pub provider_name: String,
    /// Library implementing the virtual package.
    pub library_name: String,
    /// Version of that library.
    pub library_version: String,
    /// Whether Spack may build the virtual package from source.
    pub buildable: bool,
}

/// Preferred compiler for every package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerRef {
    /// Compiler name, such as `gcc`.
    pub name: String,
    /// Compiler version, such as `11.2.0`.
    pub version: String,
}

/// An external (usually pre-installed) package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalPackage {
    /// Package name, such as `openmpi`.
    pub name: String,
    /// Full spec string, such as `openmpi@5.0.5%gcc@11.4.0`.
    pub spec: String,
    /// Whether Spack may build the package from source.
    pub buildable: bool,
    /// Modules that must be loaded to use the package.
    pub modules: Vec<String>,
    /// Installation prefix.
    pub prefix: String,
    /// Extra fields for the external entry, such as `headers` or `libs`.
    pub extra_attributes: Mapping,
    /// Replace any definition of the package from lower-precedence scopes.
    #[serde(rename = "override")]
    pub override_existing: bool,
}

/// Builder for `packages.yaml`.
#[derive(Debug, Clone, Default)]
pub struct Packages {
    config: AutoMap,
}

impl Packages {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` as the only provider of its virtual package and
    /// record whether the virtual package is buildable.
    pub fn add_provider(&mut self, provider: &ProviderSpec) {
        let library = format!("{}@{}", provider.library_name, provider.library_version);
        self.config
            .child("all")
            .child("providers")
            .set(provider.provider_name.as_str(), vec![Value::String(library), override_marker()]);
        self.config
            .child(&provider.provider_name)
            .set("buildable", provider.buildable);
    }

    /// Make `name@version` the only compiler preference for all packages.
    pub fn add_compiler(&mut self, name: &str, version: &str) {
        self.config.child("all").set(
            "compiler",
            vec![Value::String(format!("{name}@{version}")), override_marker()],
        );
    }

    /// Define an external package, merging into any entry that already
    /// exists for the same name.
    ///
    /// `buildable`, `override` and `externals` from an earlier call are
    /// replaced and re-inserted in that order, so the override flag always
    /// sits directly under the package key.
    pub fn add_package(&mut self, package: &ExternalPackage) {
        let mut external = Map::new();
        external.insert("spec".to_owned(), json!(package.spec));
        external.insert("prefix".to_owned(), json!(package.prefix));
        if !package.modules.is_empty() {
            external.insert("modules".to_owned(), json!(package.modules));
        }
        if !package.extra_attributes.is_empty() {
            external.insert(
                "extra_attributes".to_owned(),
                Value::Object(package.extra_attributes.clone()),
            );
        }

        let entry = self.config.child(&package.name);
        for key in ["buildable", "override", "externals"] {
            entry.remove(key);
        }
        entry.set("buildable", package.buildable);
        if package.override_existing {
            entry.set("override", true);
        }
        entry.set("externals", vec![Value::Object(external)]);
    }
}

impl SiteSection for Packages {
    const FILE_NAME: &'static str = "packages.yaml";

    fn config(&self) -> &AutoMap {
        &self.config
    }

    fn document(&self) -> Value {
        rooted("packages", &self.config)
    }
}
