//! Test helpers shared across crates.
//!
//! Provides a temporary output directory with UTF-8 paths and helpers for
//! reading generated YAML back into a comparable tree.

pub mod output {
    //! Temporary output directories for write tests.
    //!
    //! # Examples
    //!
    //! ```
    //! use spack_site_test_helpers::output::OutputDir;
    //!
    //! let out = OutputDir::new().expect("create temp dir");
    //! assert!(out.path().is_dir());
    //! ```

    use anyhow::{Context, Result, anyhow};
    use camino::{Utf8Path, Utf8PathBuf};
    use tempfile::TempDir;

    /// Temporary directory removed when dropped.
    pub struct OutputDir {
        path: Utf8PathBuf,
        _guard: TempDir,
    }

    impl OutputDir {
        /// Creates a fresh temporary directory.
        ///
        /// # Errors
        ///
        /// Returns an error if the directory cannot be created or its path is
        /// not valid UTF-8.
        pub fn new() -> Result<Self> {
            let guard = tempfile::tempdir().context("create temporary directory")?;
            let path = Utf8PathBuf::from_path_buf(guard.path().to_path_buf())
                .map_err(|p| anyhow!("temporary path is not UTF-8: {}", p.display()))?;
            Ok(Self {
                path,
                _guard: guard,
            })
        }

        /// Root of the temporary directory.
        #[must_use]
        pub fn path(&self) -> &Utf8Path {
            &self.path
        }

        /// `file_name` resolved under the root.
        #[must_use]
        pub fn join(&self, file_name: &str) -> Utf8PathBuf {
            self.path.join(file_name)
        }
    }
}

pub mod yaml {
    //! Read generated YAML back for structural assertions.

    use anyhow::{Context, Result};
    use camino::Utf8Path;
    use serde_json::Value;

    /// Parses YAML text into a JSON value tree.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid YAML.
    pub fn parse(text: &str) -> Result<Value> {
        serde_yaml::from_str(text).context("parse YAML")
    }

    /// Reads and parses the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read(path: &Utf8Path) -> Result<Value> {
        let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        parse(&text).with_context(|| format!("parse {path}"))
    }
}
