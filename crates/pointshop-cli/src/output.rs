//! Writers for the plan, the JSON lookup table, and its script wrapper.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Global the search page reads the lookup table from.
pub(crate) const DATA_JS_GLOBAL: &str = "APPDATA";

/// Serializes `value` as JSON with 4-space indentation.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .context("failed to serialize JSON")?;
    String::from_utf8(buf).context("serialized JSON was not UTF-8")
}

/// Wraps a JSON document as `var APPDATA = <json>;`.
pub(crate) fn render_data_js(json: &str) -> String {
    format!("var {DATA_JS_GLOBAL} = {json};")
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}

/// Writes `value` as pretty JSON to `path`.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    write_file(path, &to_pretty_json(value)?)
}

/// Reads and parses a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
