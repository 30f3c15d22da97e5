pub mod envelope;
pub mod error;

use std::time::Duration;

use async_trait::async_trait;
use color_eyre::eyre::eyre;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::{
    config::ApiConfig,
    model::{SongDetail, SongSummary},
};

pub use error::FetchError;

const BASE_PATH: [&str; 3] = ["api", "songs", "examen"];

/// Remote source of the catalog and of per-song details.
#[async_trait]
pub trait SongApi: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<SongSummary>, FetchError>;

    async fn fetch_detail(&self, song_id: &str) -> Result<SongDetail, FetchError>;
}

pub struct ApiService {
    client: Client,
    base_url: Url,
    list_id: String,
}

impl ApiService {
    pub fn new(config: &ApiConfig) -> color_eyre::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(eyre!("Base URL {} cannot carry a path", base_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            list_id: config.list_id.clone(),
        })
    }

    pub fn catalog_url(&self) -> Url {
        self.endpoint(&[&self.list_id])
    }

    pub fn detail_url(&self, song_id: &str) -> Url {
        self.endpoint(&["detail", song_id])
    }

    fn endpoint(&self, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(BASE_PATH).extend(tail);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SongApi for ApiService {
    async fn fetch_catalog(&self) -> Result<Vec<SongSummary>, FetchError> {
        let body = self.get(self.catalog_url()).await?;
        envelope::parse_catalog(&body).inspect_err(|e| warn!("Catalog rejected: {}", e))
    }

    async fn fetch_detail(&self, song_id: &str) -> Result<SongDetail, FetchError> {
        let body = self.get(self.detail_url(song_id)).await?;
        envelope::parse_detail(&body)
            .inspect_err(|e| warn!("Detail for song {} rejected: {}", song_id, e))
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
