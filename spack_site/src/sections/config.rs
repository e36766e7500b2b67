//! `config.yaml`: global Spack settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{SiteSection, rooted};
use crate::AutoMap;

/// Global settings that can be applied in one go, typically from a site
/// description file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    /// Number of parallel build jobs.
    pub build_jobs: Option<u32>,
    /// Directory builds are staged in.
    pub build_stage: Option<String>,
    /// Directory tests are staged in.
    pub test_stage: Option<String>,
    /// Download cache for source archives.
    pub source_cache: Option<String>,
    /// Cache for miscellaneous metadata.
    pub misc_cache: Option<String>,
}

/// Builder for `config.yaml`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    config: AutoMap,
}

impl Config {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of parallel build jobs.
    pub fn set_build_jobs(&mut self, build_jobs: u32) {
        self.config.set("build_jobs", build_jobs);
    }

    /// Set the build and test stage directories. Missing or empty paths are
    /// left unset.
    pub fn set_stage_paths(&mut self, build_stage: Option<&str>, test_stage: Option<&str>) {
        self.set_path("build_stage", build_stage);
        self.set_path("test_stage", test_stage);
    }

    /// Set the source and miscellaneous cache directories. Missing or empty
    /// paths are left unset.
    pub fn set_cache_paths(&mut self, source_cache: Option<&str>, misc_cache: Option<&str>) {
        self.set_path("source_cache", source_cache);
        self.set_path("misc_cache", misc_cache);
    }

    /// Apply every setting present in `settings`.
    pub fn apply(&mut self, settings: &GlobalSettings) {
        if let Some(jobs) = settings.build_jobs {
            self.set_build_jobs(jobs);
        }
        self.set_stage_paths(
            settings.build_stage.as_deref(),
            settings.test_stage.as_deref(),
        );
        self.set_cache_paths(
            settings.source_cache.as_deref(),
            settings.misc_cache.as_deref(),
        );
    }

    fn set_path(&mut self, key: &str, path: Option<&str>) {
        if let Some(path) = path.filter(|p| !p.is_empty()) {
            self.config.set(key, path);
        }
    }
}

impl SiteSection for Config {
    const FILE_NAME: &'static str = "config.yaml";

    fn config(&self) -> &AutoMap {
        &self.config
    }

    fn document(&self) -> Value {
        rooted("config", &self.config)
    }
}
