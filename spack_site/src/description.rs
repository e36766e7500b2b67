//! Declarative site descriptions loaded from TOML.
//!
//! A description lists the same inputs the section builders take, so a site
//! can be kept in a file instead of code:
//!
//! ```
//! use spack_site::{Site, SiteDescription};
//!
//! let description: SiteDescription = toml::from_str(r#"
//!     name = "alta"
//!
//!     [[providers]]
//!     provider_name = "mpi"
//!     library_name = "openmpi"
//!     library_version = "5.0.5"
//!
//!     [config]
//!     build_jobs = 8
//! "#)?;
//! let site = Site::from_description(&description);
//! assert_eq!(site.name(), "alta");
//! # Ok::<_, toml::de::Error>(())
//! ```

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::sections::{
    CompilerRef, CompilerSpec, ExternalPackage, GlobalSettings, ModuleTypeSpec, ProviderSpec,
};
use crate::{SiteError, SiteResult};

/// Everything needed to build a [`crate::Site`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDescription {
    /// Site name; also the output directory name.
    pub name: String,
    /// Virtual package providers.
    pub providers: Vec<ProviderSpec>,
    /// Compiler preferences for all packages; the last one wins.
    pub package_compilers: Vec<CompilerRef>,
    /// External package definitions.
    pub packages: Vec<ExternalPackage>,
    /// Compiler toolchains for `compilers.yaml`.
    pub compilers: Vec<CompilerSpec>,
    /// Module systems to enable.
    pub module_types: Vec<ModuleTypeSpec>,
    /// Global settings for `config.yaml`.
    pub config: GlobalSettings,
}

/// Read a [`SiteDescription`] from the TOML file at `path`.
///
/// # Errors
///
/// Returns [`SiteError::Io`] when the file cannot be read and
/// [`SiteError::Description`] when it is not a valid description.
pub fn load_description(path: &Utf8Path) -> SiteResult<SiteDescription> {
    let contents = std::fs::read_to_string(path).map_err(|err| SiteError::io(path, err))?;
    let description: SiteDescription =
        toml::from_str(&contents).map_err(|err| SiteError::description(path, err))?;
    tracing::debug!(
        %path,
        site = %description.name,
        packages = description.packages.len(),
        compilers = description.compilers.len(),
        "loaded site description"
    );
    Ok(description)
}
