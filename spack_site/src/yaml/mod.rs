//! YAML rendering with Spack's `key::` override syntax.
//!
//! Builders mark a key as overriding by placing the sentinel mapping
//! `{override: true}` next to its content (see [`override_marker`]). The
//! emitter renders the sentinel like any other mapping; [`apply_override_markers`]
//! then rewrites the rendered lines so the marked key carries a double colon
//! and the sentinel line disappears.
//!
//! The rewrite works on emitted text, so it depends on the emitter placing the
//! sentinel one or two lines below its key. Block style with indentless
//! sequences (the `serde_yaml` default) satisfies that.

use serde::Serialize;
use serde_json::{Value, json};

use crate::SiteResult;

/// Rendered text of the override sentinel.
pub const OVERRIDE_MARKER: &str = "override: true";

/// The sentinel mapping `{override: true}`.
#[must_use]
pub fn override_marker() -> Value {
    json!({ "override": true })
}

/// Render `data` as block-style YAML, preserving key order.
///
/// With `spack_format` set, keys marked by the override sentinel are rewritten
/// to `key::` and the sentinel is dropped. The result never ends in a newline.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spack_site::to_yaml;
///
/// let plain = to_yaml(&json!({"a": {"b": {"c": "d"}}}), false)?;
/// assert_eq!(plain, "a:\n  b:\n    c: d");
///
/// let spack = to_yaml(&json!({"a": [{"override": true}, {"b": "c"}]}), true)?;
/// assert_eq!(spack, "a::\n- b: c");
/// # Ok::<_, spack_site::SiteError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::SiteError::Yaml`] when the emitter rejects a value.
pub fn to_yaml<T>(data: &T, spack_format: bool) -> SiteResult<String>
where
    T: Serialize + ?Sized,
{
    let raw = serde_yaml::to_string(data)?;
    if spack_format {
        return Ok(apply_override_markers(&raw));
    }
    Ok(raw.strip_suffix('\n').unwrap_or(&raw).to_owned())
}

/// Rewrite override-marked keys in emitted YAML.
///
/// Lines are scanned top to bottom:
/// * when the line two below holds the sentinel, the key becomes `key:: `
///   followed by the next line, and all three lines are consumed;
/// * otherwise when the next line holds the sentinel, the key becomes `key::`
///   and both lines are consumed;
/// * any other line is copied.
///
/// Output lines are joined with `\n` without a trailing newline.
#[must_use]
pub fn apply_override_markers(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let mut formatted: Vec<String> = Vec::with_capacity(lines.len());
    let mut index = 0;

    while let Some(&line) = lines.get(index) {
        if let (Some(&value_line), Some(&marker)) = (lines.get(index + 1), lines.get(index + 2))
            && marker.contains(OVERRIDE_MARKER)
        {
            formatted.push(format!("{}:: \n{value_line}", key_of(line)));
            index += 3;
        } else if lines
            .get(index + 1)
            .is_some_and(|next| next.contains(OVERRIDE_MARKER))
        {
            formatted.push(format!("{}::", key_of(line)));
            index += 2;
        } else {
            formatted.push(line.to_owned());
            index += 1;
        }
    }

    formatted.join("\n")
}

/// Everything before the first colon, indentation included.
fn key_of(line: &str) -> &str {
    line.split_once(':').map_or(line, |(key, _)| key)
}

#[cfg(test)]
mod tests;
