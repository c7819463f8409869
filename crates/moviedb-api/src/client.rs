//! `MovieClient` - TMDB movie API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::LocalMovieApi;
use super::error::ApiError;
use super::params::{DiscoverParams, SearchParams};
use super::throttle::Throttle;
use super::types::{CreditsResponse, ErrorResponse, MovieDetailResponse, MovieListResponse};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Maximum number of retries for HTTP 429 responses.
const MAX_RETRIES: u32 = 3;

/// Backoff duration between retries.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// TMDB movie API client.
///
/// Injects the bearer token into the `Authorization` header on every
/// request and spaces consecutive requests through a throttle.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
    /// Request throttle.
    throttle: Arc<Mutex<Throttle>>,
}

/// Builder for `MovieClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
}

impl MovieClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            min_interval: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<MovieClient, ApiError> {
        let api_token = self.api_token.ok_or(ApiError::Config("api_token is required"))?;
        let user_agent = self
            .user_agent
            .ok_or(ApiError::Config("user_agent is required"))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let throttle = self
            .min_interval
            .map_or_else(Throttle::default_spacing, Throttle::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        Ok(MovieClient {
            http_client,
            base_url,
            api_token,
            throttle: Arc::new(Mutex::new(throttle)),
        })
    }
}

impl MovieClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MovieClientBuilder {
        MovieClientBuilder::new()
    }

    /// Sends a GET request with Bearer auth, query params, and request spacing.
    /// Retries up to `MAX_RETRIES` times on HTTP 429.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.throttle.lock().await.acquire().await;

        let url = self.base_url.join(path)?;

        let mut retries = 0u32;
        loop {
            let request = self
                .http_client
                .get(url.clone())
                .bearer_auth(&self.api_token)
                .query(query)
                .build()?;

            tracing::debug!(url = %request.url(), "TMDB API request");

            let response = self.http_client.execute(request).await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    return Err(ApiError::RateLimited {
                        retries: MAX_RETRIES,
                        path: path.to_owned(),
                    });
                }
                tracing::warn!(
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(RETRY_BACKOFF.saturating_mul(retries)).await;
                self.throttle.lock().await.acquire().await;
                continue;
            }

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<failed to read body>"));
                let message = serde_json::from_str::<ErrorResponse>(&body)
                    .map_or(body, |error_response| error_response.status_message);
                return Err(ApiError::Status { status, message });
            }

            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                path: path.to_owned(),
                source,
            });
        }
    }
}

impl LocalMovieApi for MovieClient {
    #[instrument(skip_all)]
    async fn discover_movies(
        &self,
        params: &DiscoverParams,
    ) -> Result<MovieListResponse, ApiError> {
        let query: Vec<(&str, String)> = vec![
            ("page", params.page.to_string()),
            ("include_adult", params.include_adult.to_string()),
        ];

        self.get_json("discover/movie", &query).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, params: &SearchParams) -> Result<MovieListResponse, ApiError> {
        let query: Vec<(&str, String)> = vec![
            ("page", params.page.to_string()),
            ("query", params.query.clone()),
            ("include_adult", params.include_adult.to_string()),
        ];

        self.get_json("search/movie", &query).await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetailResponse, ApiError> {
        let path = format!("movie/{movie_id}");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn movie_credits(&self, movie_id: u64) -> Result<CreditsResponse, ApiError> {
        let path = format!("movie/{movie_id}/credits");
        self.get_json(&path, &[]).await
    }
}
