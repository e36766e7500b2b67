//! Rendering coverage for plain and Spack-dialect YAML.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface builder and rendering mistakes"
)]

use rstest::rstest;
use serde::{Serialize, Serializer, ser::Error as _};
use serde_json::{Value, json};

use super::{apply_override_markers, override_marker, to_yaml};
use crate::SiteError;

#[rstest]
#[case::nested_maps(json!({"a": {"b": {"c": "d"}}}), "a:\n  b:\n    c: d")]
#[case::map_in_sequence(json!({"a": [{"b": {"c": "d"}}]}), "a:\n- b:\n    c: d")]
#[case::marker_first(json!({"a": [{"override": true}, {"b": "c"}]}), "a::\n- b: c")]
#[case::marker_after_value(
    json!({"a": [{"b": {"c": ["d", {"override": true}]}}]}),
    "a:\n- b:\n    c:: \n    - d"
)]
#[case::only_marker(json!({"compilers": [{"override": true}]}), "compilers::")]
fn spack_format_rewrites_marked_keys(#[case] data: Value, #[case] expected: &str) {
    let rendered = to_yaml(&data, true).expect("render");
    assert_eq!(rendered, expected);
}

#[rstest]
fn plain_format_keeps_markers_and_drops_trailing_newline() {
    let data = json!({"a": [{"override": true}, {"b": "c"}]});
    let rendered = to_yaml(&data, false).expect("render");
    assert_eq!(rendered, "a:\n- override: true\n- b: c");
}

#[rstest]
fn plain_format_round_trips_nested_maps() {
    let rendered = to_yaml(&json!({"a": {"b": {"c": "d"}}}), false).expect("render");
    assert_eq!(rendered, "a:\n  b:\n    c: d");
}

#[rstest]
fn providers_and_compiler_preferences_gain_double_colons() {
    let data = json!({
        "packages": {
            "all": {
                "providers": {"mpi": ["openmpi@4.1.1", override_marker()]},
                "compiler": ["gcc@11.2.0", override_marker()]
            }
        }
    });
    let rendered = to_yaml(&data, true).expect("render");
    assert_eq!(
        rendered,
        concat!(
            "packages:\n",
            "  all:\n",
            "    providers:\n",
            "      mpi:: \n",
            "      - openmpi@4.1.1\n",
            "    compiler:: \n",
            "    - gcc@11.2.0",
        )
    );
}

#[rstest]
fn package_level_override_key_is_folded_into_package_name() {
    let data = json!({
        "packages": {
            "hdf5": {
                "buildable": false,
                "override": true,
                "externals": [{"spec": "hdf5@1.12.0", "prefix": "/usr/local/hdf5"}]
            }
        }
    });
    let rendered = to_yaml(&data, true).expect("render");
    assert_eq!(
        rendered,
        concat!(
            "packages:\n",
            "  hdf5:: \n",
            "    buildable: false\n",
            "    externals:\n",
            "    - spec: hdf5@1.12.0\n",
            "      prefix: /usr/local/hdf5",
        )
    );
    assert!(!rendered.contains("override"));
}

#[rstest]
fn unmarked_documents_are_unchanged() {
    let data = json!({"config": {"build_jobs": 4, "source_cache": "/tmp/cache"}});
    let plain = to_yaml(&data, false).expect("render");
    let spack = to_yaml(&data, true).expect("render");
    assert_eq!(plain, spack);
}

#[rstest]
#[case::empty("", "")]
#[case::single_line("a: b\n", "a: b")]
#[case::marker_on_last_line("a:\n- override: true\n", "a::")]
fn line_pass_handles_short_inputs(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(apply_override_markers(raw), expected);
}

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("leaf cannot be represented"))
    }
}

#[rstest]
fn emitter_errors_propagate() {
    let err = to_yaml(&Unserializable, true).expect_err("serialization must fail");
    assert!(matches!(err, SiteError::Yaml(_)));
    assert!(err.to_string().contains("leaf cannot be represented"));
}
