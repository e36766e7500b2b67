//! The site aggregate: all four sections written into one directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;

use crate::fs_helpers::{ensure_dir, write_in_dir};
use crate::sections::{Compilers, Config, Modules, Packages, SiteSection};
use crate::{SiteDescription, SiteResult};

/// Complete Spack site configuration.
///
/// ```no_run
/// use camino::Utf8Path;
/// use spack_site::{ProviderSpec, Site};
///
/// let mut site = Site::new("basic");
/// site.packages.add_provider(&ProviderSpec {
///     provider_name: "mpi".into(),
///     library_name: "mpich".into(),
///     library_version: "4.0".into(),
///     buildable: false,
/// });
/// site.packages.add_compiler("gcc", "11.4.0");
/// site.config.set_build_jobs(8);
/// let written = site.write(Utf8Path::new("."))?;
/// assert_eq!(written.len(), 4);
/// # Ok::<_, spack_site::SiteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Site {
    name: String,
    /// `packages.yaml` builder.
    pub packages: Packages,
    /// `compilers.yaml` builder.
    pub compilers: Compilers,
    /// `modules.yaml` builder.
    pub modules: Modules,
    /// `config.yaml` builder.
    pub config: Config,
}

impl Site {
    /// Creates a site with empty sections. `name` becomes the directory the
    /// configuration is written to.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: Packages::new(),
            compilers: Compilers::new(),
            modules: Modules::new(),
            config: Config::new(),
        }
    }

    /// Builds a site by replaying `description` through the section builders.
    #[must_use]
    pub fn from_description(description: &SiteDescription) -> Self {
        let mut site = Self::new(description.name.as_str());
        for provider in &description.providers {
            site.packages.add_provider(provider);
        }
        for compiler in &description.package_compilers {
            site.packages.add_compiler(&compiler.name, &compiler.version);
        }
        for package in &description.packages {
            site.packages.add_package(package);
        }
        for compiler in &description.compilers {
            site.compilers.add_compiler(compiler);
        }
        for module_type in &description.module_types {
            site.modules.add_module_type(module_type);
        }
        site.config.apply(&description.config);
        site
    }

    /// Site name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write the site in Spack format to `<path>/<name>/`.
    ///
    /// See [`Site::write_with_format`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Io`] when the directory or a file cannot be
    /// written and [`crate::SiteError::Yaml`] when rendering fails.
    pub fn write(&self, path: &Utf8Path) -> SiteResult<Vec<Utf8PathBuf>> {
        self.write_with_format(path, true)
    }

    /// Write the site to `<path>/<name>/`, creating the directory and its
    /// parents as needed.
    ///
    /// Sections are written in the order packages, compilers, modules,
    /// config. Empty sections produce no file. Files written before a failure
    /// are left in place. Returns the paths of the files written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Io`] when the directory or a file cannot be
    /// written and [`crate::SiteError::Yaml`] when rendering fails.
    pub fn write_with_format(
        &self,
        path: &Utf8Path,
        spack_format: bool,
    ) -> SiteResult<Vec<Utf8PathBuf>> {
        let site_path = path.join(&self.name);
        let dir = ensure_dir(&site_path)?;

        let mut written = Vec::with_capacity(4);
        written.extend(write_section(&dir, &site_path, &self.packages, spack_format)?);
        written.extend(write_section(&dir, &site_path, &self.compilers, spack_format)?);
        written.extend(write_section(&dir, &site_path, &self.modules, spack_format)?);
        written.extend(write_section(&dir, &site_path, &self.config, spack_format)?);

        tracing::info!(
            site = %self.name,
            path = %site_path,
            files = written.len(),
            "wrote site configuration"
        );
        Ok(written)
    }
}

fn write_section<S: SiteSection>(
    dir: &Dir,
    dir_path: &Utf8Path,
    section: &S,
    spack_format: bool,
) -> SiteResult<Option<Utf8PathBuf>> {
    match section.render(spack_format)? {
        Some(contents) => write_in_dir(dir, dir_path, S::FILE_NAME, &contents).map(Some),
        None => {
            tracing::debug!(file = S::FILE_NAME, "section is empty; skipping write");
            Ok(None)
        }
    }
}
