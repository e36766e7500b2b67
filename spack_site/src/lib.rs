//! Build Spack site configuration in memory and write it as YAML.
//!
//! A [`Site`] bundles four section builders ([`Packages`], [`Compilers`],
//! [`Modules`], [`Config`]). Each accumulates settings in an auto-vivifying
//! [`AutoMap`] and is rendered by [`to_yaml`], which can rewrite keys marked
//! with the `{override: true}` sentinel into Spack's `key::` override syntax.

mod auto_map;
mod description;
mod error;
mod fs_helpers;
pub mod sections;
mod site;
mod yaml;

pub use auto_map::{AutoMap, Node};
pub use description::{SiteDescription, load_description};
pub use error::{SiteError, SiteResult};
pub use sections::{
    CompilerRef, CompilerSpec, Compilers, Config, ExternalPackage, GlobalSettings, Mapping,
    ModuleTypeSpec, Modules, Packages, ProviderSpec, SiteSection,
};
pub use site::Site;
pub use yaml::{OVERRIDE_MARKER, apply_override_markers, override_marker, to_yaml};
