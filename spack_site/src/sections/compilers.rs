//! `compilers.yaml`: compiler toolchain definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{Mapping, SiteSection};
use crate::{AutoMap, override_marker};

/// A compiler toolchain entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerSpec {
    /// Compiler spec, such as `gcc@11.2.0`.
    pub spec: String,
    /// Compiler executables keyed by role (`cc`, `cxx`, `f77`, `fc`).
    pub paths: Mapping,
    /// Default flags, such as `cflags` or `cxxflags`.
    pub flags: Mapping,
    /// Operating system the compiler targets, such as `ubuntu22.04`.
    pub operating_system: String,
    /// Target architecture, such as `x86_64`.
    pub target: String,
    /// Modules loaded before the compiler is used.
    pub modules: Option<Vec<String>>,
    /// Environment modifications applied when the compiler runs.
    pub environment: Option<Mapping>,
    /// Additional run paths added to every build.
    pub extra_rpaths: Option<Vec<String>>,
}

impl CompilerSpec {
    fn to_entry(&self) -> Value {
        json!({
            "compiler": {
                "spec": self.spec,
                "paths": self.paths,
                "flags": self.flags,
                "operating_system": self.operating_system,
                "target": self.target,
                "modules": self.modules,
                "environment": self.environment,
                "extra_rpaths": self.extra_rpaths
            }
        })
    }
}

/// Builder for `compilers.yaml`.
///
/// The compiler list always starts with the override sentinel so that the
/// written list replaces compilers Spack finds on its own.
#[derive(Debug, Clone)]
pub struct Compilers {
    config: AutoMap,
}

impl Compilers {
    /// Creates a section holding only the override sentinel.
    #[must_use]
    pub fn new() -> Self {
        let mut config = AutoMap::new();
        config.set("compilers", vec![override_marker()]);
        Self { config }
    }

    /// Append a compiler definition.
    pub fn add_compiler(&mut self, compiler: &CompilerSpec) {
        let entry = compiler.to_entry();
        match self.config.get_or_create("compilers").as_seq_mut() {
            Some(list) => list.push(entry),
            None => self.config.set("compilers", vec![override_marker(), entry]),
        }
    }
}

impl Default for Compilers {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteSection for Compilers {
    const FILE_NAME: &'static str = "compilers.yaml";

    fn config(&self) -> &AutoMap {
        &self.config
    }

    fn document(&self) -> Value {
        self.config.to_dict()
    }
}
