//! # HTTP backend
//!
//! [`HttpBackend`] talks to the REST API with `reqwest`, which uses the
//! browser's `fetch` on WASM. Every request carries
//! `Content-Type: application/json`; any non-2xx status becomes
//! [`ApiError::Status`] and the body is ignored.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::Backend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Artist, CompareResult, LyricQuote, NewShare, ReactRequest, Reaction, SharedSong, Track, User,
    UserId,
};

/// Method, query and body for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            query: Vec::new(),
            body: None,
        }
    }

    /// A `POST` carrying `body` as JSON.
    pub fn post(body: &impl Serialize) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self {
            method: Method::POST,
            query: Vec::new(),
            body: Some(body),
        })
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// [`Backend`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform a request against `path` (e.g. `/api/shared`) and decode the
    /// JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, &[])?;
        self.send(url, options).await
    }

    fn endpoint(&self, path: &str, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.config.url(path))
            .map_err(|e| ApiError::Transport(format!("invalid url for {path}: {e}")))?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ApiError::Transport(format!("cannot extend {path}")))?
                .pop_if_empty()
                .extend(segments);
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, url: Url, options: RequestOptions) -> Result<T, ApiError> {
        tracing::debug!(method = %options.method, %url, "api request");

        let mut request = self
            .client
            .request(options.method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method = %options.method, %url, status = status.as_u16(), "api request failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_ack(&self, path: &str, body: &impl Serialize) -> Result<(), ApiError> {
        let _: serde_json::Value = self.request(path, RequestOptions::post(body)?).await?;
        Ok(())
    }
}

impl Backend for HttpBackend {
    async fn shared_songs(&self) -> Result<Vec<SharedSong>, ApiError> {
        self.request("/api/shared", RequestOptions::get()).await
    }

    async fn react(&self, shared_song_id: i64, reaction: Reaction) -> Result<(), ApiError> {
        let body = ReactRequest {
            shared_song_id,
            reaction,
        };
        self.post_ack("/api/react", &body).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, ApiError> {
        self.request("/api/search", RequestOptions::get().with_query("q", query))
            .await
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.request("/api/users", RequestOptions::get()).await
    }

    async fn share(&self, share: &NewShare) -> Result<(), ApiError> {
        self.post_ack("/api/share", share).await
    }

    async fn compare(&self, other_id: &UserId) -> Result<CompareResult, ApiError> {
        let url = self.endpoint("/api/compare", &[other_id.as_str()])?;
        self.send(url, RequestOptions::get()).await
    }

    async fn top_tracks(&self) -> Result<Vec<Track>, ApiError> {
        self.request("/api/me/top-tracks", RequestOptions::get()).await
    }

    async fn top_artists(&self) -> Result<Vec<Artist>, ApiError> {
        self.request("/api/me/top-artists", RequestOptions::get()).await
    }

    async fn top_lyrics(&self) -> Result<Vec<LyricQuote>, ApiError> {
        self.request("/api/me/top-lyrics", RequestOptions::get()).await
    }
}
