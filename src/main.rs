mod catalog;
mod cli;
mod http;
mod manifest;
mod matcher;
mod output;
mod progress;
mod registry;
mod types;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::http::WebClient;
use crate::types::ImageMatch;

#[tokio::main]
async fn main() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let cli = Cli::parse();
    let manifest_path = resolve_manifest_path(cli.manifest.as_deref(), &cwd);

    let client = WebClient::new()?;
    let mut matches = progress::with_spinner(
        "依存関係と公式イメージを照合中...",
        matcher::match_dependencies(&client, &manifest_path, cli.catalog_url.as_deref()),
    )
    .await?;

    if let Some(query) = cli.search.as_deref() {
        let needle = query.to_ascii_lowercase();
        let before = matches.len();
        matches.retain(|image| image_matches_query(image, &needle));
        println!(
            "> 検索クエリ \"{query}\" を適用: {before}件 -> {}件",
            matches.len()
        );
        if matches.is_empty() {
            println!("指定の検索条件に一致するイメージはありません。");
        }
    }

    println!("> レポートを出力中...");
    output::print_table(&matches, cli.hide_description)?;
    output::output_json(&matches, cli.print_json, cli.json_output.as_deref())?;
    println!("✔ レポート出力完了");

    Ok(())
}

fn resolve_manifest_path(manifest: Option<&Path>, cwd: &Path) -> PathBuf {
    match manifest {
        None => cwd.join("package.json"),
        Some(path) if path.is_relative() => cwd.join(path),
        Some(path) => path.to_path_buf(),
    }
}

fn image_matches_query(image: &ImageMatch, needle: &str) -> bool {
    [image.name.as_str(), image.description.as_str()]
        .iter()
        .map(|value| value.to_ascii_lowercase())
        .any(|value| value.contains(needle))
}
