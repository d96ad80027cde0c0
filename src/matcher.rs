use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use futures::future;

use crate::http::HttpFetch;
use crate::types::ImageMatch;
use crate::{catalog, manifest, registry};

pub async fn match_dependencies(
    fetcher: &impl HttpFetch,
    manifest_path: &Path,
    catalog_url: Option<&str>,
) -> Result<Vec<ImageMatch>> {
    // マニフェストが読めなければネットワークアクセスせずに終了する。
    let names = manifest::dependencies(manifest_path)?;
    let urls: Vec<String> = names.iter().map(|name| registry::registry_url(name)).collect();

    let keyword_fetches =
        future::try_join_all(urls.iter().map(|url| registry::fetch_and_parse(fetcher, url)));
    let (keyword_lists, images) =
        tokio::try_join!(keyword_fetches, catalog::fetch_catalog(fetcher, catalog_url))?;

    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    for keyword in keyword_lists.into_iter().flatten() {
        if let Some(description) = images.get(&keyword) {
            if seen.insert(keyword.clone()) {
                matches.push(ImageMatch {
                    name: keyword,
                    description: description.clone(),
                });
            }
        }
    }

    Ok(matches)
}
