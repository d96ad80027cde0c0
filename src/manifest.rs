use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct PackageManifest {
    dependencies: Map<String, Value>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
}

pub fn dependencies(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("package.jsonの読み込みに失敗: {}", path.display()))?;
    let manifest: PackageManifest = serde_json::from_str(&text)
        .with_context(|| format!("package.jsonのJSON解析に失敗: {}", path.display()))?;

    Ok(manifest
        .dependencies
        .keys()
        .chain(manifest.dev_dependencies.keys())
        .cloned()
        .collect())
}
