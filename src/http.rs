use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait HttpFetch: Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

#[derive(Debug)]
pub struct WebClient {
    client: Client,
}

impl WebClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("image-scout/0.1.0")
            .timeout(Duration::from_secs(10))
            .build()
            .context("HTTPクライアントの初期化に失敗しました")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for WebClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("リクエストに失敗しました: {url}"))?;

        if !response.status().is_success() {
            bail!("サーバーがエラーを返しました({url}): {}", response.status());
        }

        response
            .text()
            .await
            .with_context(|| format!("レスポンスの読み取りに失敗: {url}"))
    }
}
