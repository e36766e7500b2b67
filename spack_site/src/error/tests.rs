//! Display and source-chain coverage for `SiteError`.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface builder and rendering mistakes"
)]

use std::error::Error as _;

use camino::Utf8Path;
use rstest::rstest;

use super::SiteError;

#[rstest]
fn io_error_names_the_path() {
    let err = SiteError::io(
        Utf8Path::new("/tmp/site/config.yaml"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert_eq!(err.to_string(), "I/O error at /tmp/site/config.yaml: denied");
    assert!(err.source().is_some(), "I/O errors keep their source");
}

#[rstest]
fn description_error_wraps_parser_failure() {
    let parse_err = toml::from_str::<toml::Table>("name = ").expect_err("invalid TOML");
    let err = SiteError::description(Utf8Path::new("site.toml"), parse_err);
    assert!(
        err.to_string().starts_with("invalid site description in 'site.toml'"),
        "unexpected message: {err}"
    );
    assert!(matches!(err, SiteError::Description { .. }));
}
