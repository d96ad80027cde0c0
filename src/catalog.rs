use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http::HttpFetch;

// 公式イメージは1ページに収まる想定。page_sizeを超えた分は取得されない。
const DEFAULT_CATALOG_URL: &str = "https://hub.docker.com/v2/repositories/library/?page_size=1000";

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    results: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    description: Option<String>,
}

pub async fn fetch_catalog(
    fetcher: &impl HttpFetch,
    url: Option<&str>,
) -> Result<HashMap<String, String>> {
    let url = url.unwrap_or(DEFAULT_CATALOG_URL);
    let body = fetcher
        .fetch_text(url)
        .await
        .with_context(|| format!("カタログの取得に失敗: {url}"))?;
    parse_catalog(&body).with_context(|| format!("カタログレスポンスの解析に失敗: {url}"))
}

fn parse_catalog(body: &str) -> Result<HashMap<String, String>> {
    let data: CatalogResponse = serde_json::from_str(body)?;

    let mut images = HashMap::new();
    for entry in data.results {
        images.insert(entry.name, entry.description.unwrap_or_default());
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_description_pairs() {
        let body = r#"{ "results": [ { "name": "nginx", "description": "Official build of Nginx.", "star_count": 20000 } ] }"#;
        let images = parse_catalog(body).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(
            images.get("nginx").map(String::as_str),
            Some("Official build of Nginx.")
        );
    }

    #[test]
    fn duplicate_name_keeps_last_entry() {
        let body = r#"{ "results": [
            { "name": "redis", "description": "古い説明" },
            { "name": "redis", "description": "新しい説明" }
        ] }"#;
        let images = parse_catalog(body).unwrap();
        assert_eq!(images.get("redis").map(String::as_str), Some("新しい説明"));
    }

    #[test]
    fn null_description_becomes_empty_string() {
        let body = r#"{ "results": [ { "name": "busybox", "description": null } ] }"#;
        let images = parse_catalog(body).unwrap();
        assert_eq!(images.get("busybox").map(String::as_str), Some(""));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_catalog("{ \"results\": ").is_err());
        assert!(parse_catalog("{}").is_err());
    }
}
