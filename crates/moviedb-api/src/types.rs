//! TMDB API response types.
//!
//! Every field is optional. TMDB omits or nulls fields freely depending on
//! the endpoint and record, so the wire shapes default everything and leave
//! it to the domain layer to fill in deterministic defaults.

use serde::Deserialize;

// --- Paginated movie listing ---

/// Response from `discover/movie` and `search/movie` endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieListResponse {
    /// Current page number.
    pub page: Option<u32>,
    /// Movies on this page.
    pub results: Option<Vec<MovieResponse>>,
    /// Total number of pages.
    pub total_pages: Option<u32>,
    /// Total number of results across all pages.
    pub total_results: Option<u32>,
}

/// A single movie entry within a paginated listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieResponse {
    /// Adult flag.
    pub adult: Option<bool>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Genre IDs (not resolved to genre records).
    pub genre_ids: Option<Vec<u32>>,
    /// TMDB movie ID.
    pub id: Option<u64>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Original title.
    pub original_title: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: Option<f64>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Release date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Localized title.
    pub title: Option<String>,
    /// Video flag.
    pub video: Option<bool>,
    /// Vote average.
    pub vote_average: Option<f64>,
    /// Vote count.
    pub vote_count: Option<u32>,
}

// --- Movie details ---

/// Response from the `movie/{id}` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieDetailResponse {
    /// Adult flag.
    pub adult: Option<bool>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Production budget in USD.
    pub budget: Option<u64>,
    /// Genres. Entries themselves may be JSON null.
    pub genres: Option<Vec<Option<GenreResponse>>>,
    /// Official homepage URL.
    pub homepage: Option<String>,
    /// TMDB movie ID.
    pub id: Option<u64>,
    /// IMDb ID (e.g. "tt1375666").
    pub imdb_id: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Original title.
    pub original_title: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: Option<f64>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Production companies.
    pub production_companies: Option<Vec<ProductionCompanyResponse>>,
    /// Production countries.
    pub production_countries: Option<Vec<ProductionCountryResponse>>,
    /// Release date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Worldwide revenue in USD.
    pub revenue: Option<u64>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Spoken languages.
    pub spoken_languages: Option<Vec<SpokenLanguageResponse>>,
    /// Release status (e.g. "Released").
    pub status: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Localized title.
    pub title: Option<String>,
    /// Video flag.
    pub video: Option<bool>,
    /// Vote average.
    pub vote_average: Option<f64>,
    /// Vote count.
    pub vote_count: Option<u32>,
}

/// Genre entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenreResponse {
    /// Genre ID.
    pub id: Option<u32>,
    /// Genre name.
    pub name: Option<String>,
}

/// Production company entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductionCompanyResponse {
    /// Company ID.
    pub id: Option<u64>,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Company name.
    pub name: Option<String>,
    /// Origin country (ISO 3166-1).
    pub origin_country: Option<String>,
}

/// Production country entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductionCountryResponse {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: Option<String>,
    /// Country name.
    pub name: Option<String>,
}

/// Spoken language entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpokenLanguageResponse {
    /// English name of the language.
    pub english_name: Option<String>,
    /// Language code (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Native name of the language.
    pub name: Option<String>,
}

// --- Credits ---

/// Response from the `movie/{id}/credits` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditsResponse {
    /// Cast entries.
    pub cast: Option<Vec<CastResponse>>,
    /// TMDB movie ID the credits belong to.
    pub id: Option<u64>,
}

/// A single cast entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CastResponse {
    /// Credit-local cast ID.
    pub cast_id: Option<u32>,
    /// Character name.
    pub character: Option<String>,
    /// TMDB person ID.
    pub id: Option<u64>,
    /// Person name.
    pub name: Option<String>,
    /// Billing order (0 = top billing).
    pub order: Option<u32>,
    /// Original (untranslated) name.
    pub original_name: Option<String>,
    /// Popularity score.
    pub popularity: Option<f64>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

// --- Error response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_movie_list_all_fields_optional() {
        // Arrange & Act
        let response: MovieListResponse = serde_json::from_str("{}").unwrap();

        // Assert
        assert!(response.page.is_none());
        assert!(response.results.is_none());
        assert!(response.total_pages.is_none());
        assert!(response.total_results.is_none());
    }

    #[test]
    fn test_movie_entry_unknown_fields_ignored() {
        // Arrange
        let json = r#"{"id": 27205, "title": "Inception", "media_type": "movie"}"#;

        // Act
        let movie: MovieResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.id, Some(27_205));
        assert_eq!(movie.title.as_deref(), Some("Inception"));
        assert!(movie.vote_average.is_none());
    }

    #[test]
    fn test_detail_genres_allow_null_entries() {
        // Arrange
        let json = r#"{"id": 1, "genres": [{"id": 28, "name": "Action"}, null]}"#;

        // Act
        let detail: MovieDetailResponse = serde_json::from_str(json).unwrap();

        // Assert
        let genres = detail.genres.unwrap();
        assert_eq!(genres.len(), 2);
        assert!(genres[0].is_some());
        assert!(genres[1].is_none());
    }

    #[test]
    fn test_explicit_null_fields_deserialize() {
        // Arrange
        let json = r#"{"page": 1, "results": null, "total_pages": null, "total_results": 0}"#;

        // Act
        let response: MovieListResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(response.page, Some(1));
        assert!(response.results.is_none());
        assert!(response.total_pages.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        // Arrange
        let json = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(error.status_code, 7);
        assert!(!error.success);
        assert!(error.status_message.contains("Invalid API key"));
    }
}
