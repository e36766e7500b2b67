//! Builders for the four Spack configuration sections.
//!
//! Each builder accumulates its settings in an [`AutoMap`] and knows how to
//! wrap, render, and write them through [`SiteSection`].

mod compilers;
mod config;
mod modules;
mod packages;

pub use compilers::{CompilerSpec, Compilers};
pub use config::{Config, GlobalSettings};
pub use modules::{ModuleTypeSpec, Modules};
pub use packages::{CompilerRef, ExternalPackage, Packages, ProviderSpec};

use camino::Utf8Path;
use serde_json::{Map, Value};

use crate::{AutoMap, SiteResult, fs_helpers, to_yaml};

/// Plain ordered mapping used for free-form builder inputs such as compiler
/// paths, flags, or environment blocks.
pub type Mapping = Map<String, Value>;

/// Common behaviour of a configuration section.
pub trait SiteSection {
    /// File name the section is written to inside a site directory.
    const FILE_NAME: &'static str;

    /// Accumulated settings.
    fn config(&self) -> &AutoMap;

    /// Plain document for the section, rooted at its top-level key.
    fn document(&self) -> Value;

    /// Render the section, or `None` when nothing has been configured.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SiteError::Yaml`] from the emitter.
    fn render(&self, spack_format: bool) -> SiteResult<Option<String>> {
        if self.config().is_empty() {
            return Ok(None);
        }
        to_yaml(&self.document(), spack_format).map(Some)
    }

    /// Write the section to `path`.
    ///
    /// Returns `false` without touching the file system when the section is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Io`] if the file cannot be written and
    /// [`crate::SiteError::Yaml`] if rendering fails.
    fn write(&self, path: &Utf8Path, spack_format: bool) -> SiteResult<bool> {
        let Some(contents) = self.render(spack_format)? else {
            tracing::debug!(%path, "section is empty; skipping write");
            return Ok(false);
        };
        fs_helpers::write_file(path, &contents)?;
        Ok(true)
    }
}

/// Wrap `config` under a single `root` key.
fn rooted(root: &str, config: &AutoMap) -> Value {
    let mut document = Map::new();
    document.insert(root.to_owned(), config.to_dict());
    Value::Object(document)
}
