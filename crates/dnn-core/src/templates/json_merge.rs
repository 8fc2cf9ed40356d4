//! Deep merge for JSON configuration files
//!
//! Package manifests and editor/debugger configs are extended rather than
//! overwritten: supplied leaves win on conflict, keys the patch does not
//! mention are preserved, and files keep their key order across rewrites.

use crate::error::{Result, ScaffoldError};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Recursively merge `patch` into `base`. Objects merge key-by-key; arrays
/// and scalars are replaced wholesale.
pub fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

/// Merge `patch` into the JSON file at `path`, creating the file with
/// exactly the patch's contents when it does not yet exist.
pub async fn merge_into_file(path: &Path, patch: &Value) -> Result<()> {
    let merged = if path.exists() {
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| ScaffoldError::io("failed to read JSON file", path, e))?;
        let mut existing: Value = serde_json::from_str(&text).map_err(|e| ScaffoldError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        deep_merge(&mut existing, patch);
        existing
    } else {
        patch.clone()
    };

    write_pretty(path, &merged).await
}

/// Write a JSON value with 2-space indentation and a trailing newline.
pub async fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io("failed to create directory", parent, e))?;
    }
    let mut text = serde_json::to_string_pretty(value).map_err(|e| ScaffoldError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    text.push('\n');
    fs::write(path, text)
        .await
        .map_err(|e| ScaffoldError::io("failed to write JSON file", path, e))
}
