//! Movie repository: endpoint selection and wire-to-domain mapping.
#![allow(clippy::future_not_send)]

use moviedb_api::{DiscoverParams, LocalMovieApi, SearchParams};
use tracing::instrument;

use super::error::CatalogError;
use super::models::{Credits, MovieDetail, MoviePage};

/// Repository over a TMDB movie API implementation.
///
/// Chooses the discover or search endpoint based on the presence of a
/// query string and maps wire responses to domain models.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieRepository<A> {
    /// Underlying API implementation.
    api: A,
}

impl<A: LocalMovieApi + Sync> MovieRepository<A> {
    /// Creates a repository over the given API implementation.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetches one page of the movie listing.
    ///
    /// A non-empty query goes to the search endpoint; `None` or an empty
    /// query goes to discover.
    ///
    /// # Errors
    ///
    /// Returns a classified [`CatalogError`] if the API call fails.
    #[instrument(skip_all)]
    pub async fn movie_page(
        &self,
        query: Option<&str>,
        page: u32,
    ) -> Result<MoviePage, CatalogError> {
        let response = match query.filter(|q| !q.is_empty()) {
            Some(q) => {
                self.api
                    .search_movies(&SearchParams::new(q).page(page))
                    .await?
            }
            None => {
                self.api
                    .discover_movies(&DiscoverParams::new().page(page))
                    .await?
            }
        };

        Ok(MoviePage::from(response))
    }

    /// Fetches full details for a single movie.
    ///
    /// # Errors
    ///
    /// Returns a classified [`CatalogError`] if the API call fails.
    #[instrument(skip_all)]
    pub async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail, CatalogError> {
        let response = self.api.movie_details(movie_id).await?;
        Ok(MovieDetail::from(response))
    }

    /// Fetches cast credits for a single movie.
    ///
    /// # Errors
    ///
    /// Returns a classified [`CatalogError`] if the API call fails.
    #[instrument(skip_all)]
    pub async fn movie_credits(&self, movie_id: u64) -> Result<Credits, CatalogError> {
        let response = self.api.movie_credits(movie_id).await?;
        Ok(Credits::from(response))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use moviedb_api::MovieClient;

    use super::*;
    use crate::error::ErrorKind;

    const EMPTY_PAGE: &str = r#"{"page":1,"results":[],"total_pages":1,"total_results":0}"#;

    fn repository(mock_uri: &str) -> MovieRepository<MovieClient> {
        let base_url = format!("{mock_uri}/3/");
        let client = MovieClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("test-token")
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap();
        MovieRepository::new(client)
    }

    #[tokio::test]
    async fn test_none_query_hits_discover_endpoint() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/discover/movie"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act & Assert (mock expect(1) verifies the endpoint)
        repo.movie_page(None, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_some_query_hits_search_endpoint() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/movie"))
            .and(wiremock::matchers::query_param("query", "inception"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act & Assert (mock expect(1) verifies the endpoint)
        repo.movie_page(Some("inception"), 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_query_hits_discover_endpoint() {
        // Arrange: TMDB rejects search requests with an empty query
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/discover/movie"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act & Assert (mock expect(1) verifies the endpoint)
        repo.movie_page(Some(""), 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_movie_page_maps_to_domain() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = r#"{
            "page": 2,
            "results": [{"id": 27205, "title": "Inception"}],
            "total_pages": 10,
            "total_results": 200
        }"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/discover/movie"))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act
        let page = repo.movie_page(None, 2).await.unwrap();

        // Assert
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Inception");
        assert_eq!(page.results[0].overview, "");
    }

    #[tokio::test]
    async fn test_movie_detail_maps_to_domain() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = r#"{"id": 27205, "title": "Inception", "runtime": 148}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/27205"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act
        let detail = repo.movie_detail(27_205).await.unwrap();

        // Assert
        assert_eq!(detail.id, 27_205);
        assert_eq!(detail.runtime, 148);
        assert_eq!(detail.tagline, "");
    }

    #[tokio::test]
    async fn test_movie_credits_maps_to_domain() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = r#"{"id": 27205, "cast": [{"id": 6193, "name": "Leonardo DiCaprio", "order": 0}]}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/27205/credits"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act
        let credits = repo.movie_credits(27_205).await.unwrap();

        // Assert
        assert_eq!(credits.id, 27_205);
        assert_eq!(credits.cast[0].name, "Leonardo DiCaprio");
    }

    #[tokio::test]
    async fn test_http_401_surfaces_unauthorized_kind() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_string(
                r#"{"status_code":7,"status_message":"Invalid API key","success":false}"#,
            ))
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act
        let err = repo.movie_page(None, 1).await.unwrap_err();

        // Assert
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Unauthorized access");
    }

    #[tokio::test]
    async fn test_http_404_surfaces_not_found_kind() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(
                r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#,
            ))
            .mount(&mock_server)
            .await;

        let repo = repository(&mock_server.uri());

        // Act
        let err = repo.movie_detail(999_999_999).await.unwrap_err();

        // Assert
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Resource not found");
    }

    #[tokio::test]
    async fn test_unreachable_server_surfaces_network_kind() {
        // Arrange: start a server to reserve a port, then shut it down.
        // Use a non-pooled server so dropping it actually closes the port;
        // `MockServer::start()` returns a pooled server that keeps listening.
        let mock_server = wiremock::MockServer::builder().start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        let repo = repository(&uri);

        // Act
        let err = repo.movie_page(None, 1).await.unwrap_err();

        // Assert
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.message, "No internet connection");
    }
}
