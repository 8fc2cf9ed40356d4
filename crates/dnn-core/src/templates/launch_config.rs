//! Debugger launch configuration shared across generated modules
//!
//! `.vscode/launch.json` lives at the generation root, not inside the module
//! directory, so repeated runs against the same root keep appending entries.
//! Existing entries are never touched.

use crate::error::{Result, ScaffoldError};
use crate::templates::json_merge::write_pretty;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// One entry in the launch configuration's `configurations` array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub name: String,
    pub url: String,
    pub web_root: String,
    pub source_maps: bool,
    pub trace: bool,
}

/// A Chrome debug entry pointing at the module's dev server
pub fn chrome_launch_entry(module_name: &str) -> LaunchEntry {
    LaunchEntry {
        kind: "chrome".to_string(),
        request: "launch".to_string(),
        name: format!("Launch Chrome against {module_name}"),
        url: "http://localhost:3000".to_string(),
        web_root: format!("${{workspaceRoot}}/{module_name}"),
        source_maps: true,
        trace: true,
    }
}

/// Append one launch entry to `.vscode/launch.json` under the generation
/// root, creating the file with a single entry when absent. Returns the
/// path that was written.
pub async fn append_entry(destination_root: &Path, entry: &LaunchEntry) -> Result<PathBuf> {
    let path = destination_root.join(".vscode").join("launch.json");

    let mut config = if path.exists() {
        let text = fs::read_to_string(&path)
            .await
            .map_err(|e| ScaffoldError::io("failed to read launch config", &path, e))?;
        serde_json::from_str(&text).map_err(|e| ScaffoldError::Json {
            path: path.clone(),
            source: e,
        })?
    } else {
        json!({
            "version": "0.2.0",
            "configurations": []
        })
    };

    let entry = serde_json::to_value(entry).map_err(|e| ScaffoldError::Json {
        path: path.clone(),
        source: e,
    })?;

    match config.get_mut("configurations").and_then(Value::as_array_mut) {
        Some(configurations) => configurations.push(entry),
        // A hand-edited file may lack the array; recreate it
        None => {
            config["configurations"] = Value::Array(vec![entry]);
        }
    }

    write_pretty(&path, &config).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_ends_with_module_name() {
        let entry = serde_json::to_value(chrome_launch_entry("Widget")).unwrap();
        assert_eq!(entry["name"], "Launch Chrome against Widget");
        assert_eq!(entry["webRoot"], "${workspaceRoot}/Widget");
        assert_eq!(entry["type"], "chrome");
        assert_eq!(entry["sourceMaps"], true);
    }

    #[tokio::test]
    async fn test_absent_file_created_with_one_entry() {
        let dir = tempfile::tempdir().unwrap();

        let path = append_entry(dir.path(), &chrome_launch_entry("Widget"))
            .await
            .unwrap();

        let config: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config["version"], "0.2.0");

        let entries = config["configurations"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0]["name"].as_str().unwrap().ends_with("Widget"));
    }

    #[tokio::test]
    async fn test_existing_entries_preserved_on_append() {
        let dir = tempfile::tempdir().unwrap();
        let vscode = dir.path().join(".vscode");
        std::fs::create_dir_all(&vscode).unwrap();

        let existing = json!({
            "version": "0.2.0",
            "configurations": [
                {"type": "chrome", "request": "launch", "name": "Launch Chrome against First"},
                {"type": "node", "request": "attach", "name": "Attach to server"}
            ]
        });
        std::fs::write(
            vscode.join("launch.json"),
            serde_json::to_string_pretty(&existing).unwrap(),
        )
        .unwrap();

        let path = append_entry(dir.path(), &chrome_launch_entry("Third"))
            .await
            .unwrap();

        let config: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entries = config["configurations"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], existing["configurations"][0]);
        assert_eq!(entries[1], existing["configurations"][1]);
        assert_eq!(entries[2]["name"], "Launch Chrome against Third");
    }
}
