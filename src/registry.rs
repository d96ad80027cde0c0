use anyhow::{Context, Result};
use scraper::{Html, Selector};
use urlencoding::encode;

use crate::http::HttpFetch;

// npmjs.comのパッケージ詳細ページ。サイドバーのキーワード段落を読み取る。
const KEYWORD_SELECTOR: &str = "div.sidebar p.keywords";

pub fn registry_url(name: &str) -> String {
    let encoded = encode(name);
    format!("https://www.npmjs.com/package/{encoded}")
}

pub async fn fetch_and_parse(fetcher: &impl HttpFetch, url: &str) -> Result<Vec<String>> {
    let body = fetcher
        .fetch_text(url)
        .await
        .with_context(|| format!("レジストリページの取得に失敗: {url}"))?;
    Ok(scrape_keywords(&body))
}

// 期待するノードが無いページは空のリストとして扱う。マークアップ変更時は
// エラーにならず黙って空になる点に注意。
pub fn scrape_keywords(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(KEYWORD_SELECTOR).unwrap();

    match document.select(&selector).next() {
        Some(element) => {
            let text: String = element.text().collect();
            text.split(',').map(|token| token.trim().to_string()).collect()
        }
        None => Vec::new(),
    }
}
