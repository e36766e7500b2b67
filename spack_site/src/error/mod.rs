//! Error types produced while rendering and writing site configuration.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors that can occur while rendering or writing site configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiteError {
    /// A directory or file could not be opened, created, or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the file system.
        #[source]
        source: std::io::Error,
    },

    /// The YAML emitter rejected the configuration tree.
    #[error("failed to emit YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A site description file could not be parsed.
    #[error("invalid site description in '{path}': {source}")]
    Description {
        /// Description file that failed to parse.
        path: Utf8PathBuf,
        /// Parser error with location information.
        #[source]
        source: Box<toml::de::Error>,
    },
}

impl SiteError {
    /// Construct an [`SiteError::Io`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use spack_site::SiteError;
    ///
    /// let err = SiteError::io(Utf8Path::new("site/packages.yaml"), std::io::ErrorKind::NotFound.into());
    /// assert!(err.to_string().starts_with("I/O error at site/packages.yaml"));
    /// ```
    #[must_use]
    pub fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn description(path: &Utf8Path, source: toml::de::Error) -> Self {
        Self::Description {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }
}

/// Result alias used throughout the crate.
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests;
