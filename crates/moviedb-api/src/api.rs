//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::ApiError;
use super::params::{DiscoverParams, SearchParams};
use super::types::{CreditsResponse, MovieDetailResponse, MovieListResponse};

/// TMDB movie API trait.
///
/// Abstracts API operations for fake substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches a page of the general movie listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn discover_movies(
        &self,
        params: &DiscoverParams,
    ) -> Result<MovieListResponse, ApiError>;

    /// Fetches a page of movies matching a text query.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_movies(&self, params: &SearchParams) -> Result<MovieListResponse, ApiError>;

    /// Fetches full details for a single movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetailResponse, ApiError>;

    /// Fetches cast credits for a single movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_credits(&self, movie_id: u64) -> Result<CreditsResponse, ApiError>;
}
