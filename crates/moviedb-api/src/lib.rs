//! TMDB movie API client library for moviedb.
//!
//! Handles HTTP requests to the TMDB API v3 movie endpoints
//! (`discover/movie`, `search/movie`, `movie/{id}`, `movie/{id}/credits`).

mod api;
mod client;
mod error;
mod params;
mod throttle;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{MovieClient, MovieClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::ApiError;
pub use params::{DiscoverParams, SearchParams};
pub use types::{
    CastResponse, CreditsResponse, ErrorResponse, GenreResponse, MovieDetailResponse,
    MovieListResponse, MovieResponse, ProductionCompanyResponse, ProductionCountryResponse,
    SpokenLanguageResponse,
};
