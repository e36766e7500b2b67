//! `modules.yaml`: module-system generation settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{SiteSection, rooted};
use crate::{AutoMap, override_marker};

/// Settings for one module system, such as `lmod` or `tcl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleTypeSpec {
    /// Module system to enable.
    pub module_type: String,
    /// Which dependencies are autoloaded (`none`, `run`, `direct`, `all`).
    pub autoload: String,
    /// Length of the hash suffix in module names.
    pub hash_length: u32,
    /// Whether modules of implicitly installed packages are hidden.
    pub hide_implicits: bool,
    /// Packages that always get a module.
    pub include: Vec<String>,
    /// Packages that never get a module.
    pub exclude: Vec<String>,
}

/// Builder for `modules.yaml`.
#[derive(Debug, Clone)]
pub struct Modules {
    config: AutoMap,
}

impl Modules {
    /// Creates a section with an empty `default.enable` list.
    #[must_use]
    pub fn new() -> Self {
        let mut config = AutoMap::new();
        config.child("default").set("enable", Vec::<Value>::new());
        Self { config }
    }

    /// Enable a module system and record its settings.
    ///
    /// The override sentinel follows the first enabled module system, which
    /// makes the enable list replace Spack's default one.
    pub fn add_module_type(&mut self, spec: &ModuleTypeSpec) {
        let default = self.config.child("default");
        let module_type = Value::String(spec.module_type.clone());
        match default.get_or_create("enable").as_seq_mut() {
            Some(enable) => {
                let marker = override_marker();
                let has_marker = enable.contains(&marker);
                enable.push(module_type);
                if !has_marker {
                    enable.push(marker);
                }
            }
            None => default.set("enable", vec![module_type, override_marker()]),
        }

        let settings = default.child(&spec.module_type);
        settings.child("all").set("autoload", spec.autoload.as_str());
        settings.set("hash_length", spec.hash_length);
        settings.set("hide_implicits", spec.hide_implicits);
        if !spec.exclude.is_empty() {
            settings.set("exclude", spec.exclude.clone());
        }
        if !spec.include.is_empty() {
            settings.set("include", spec.include.clone());
        }
    }
}

impl Default for Modules {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteSection for Modules {
    const FILE_NAME: &'static str = "modules.yaml";

    fn config(&self) -> &AutoMap {
        &self.config
    }

    fn document(&self) -> Value {
        rooted("modules", &self.config)
    }
}
