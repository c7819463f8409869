//! Domain models mapped from TMDB wire responses.
//!
//! Flat, immutable value records. Every missing or null wire field maps
//! to a deterministic default: empty string, empty list, `0`, `0.0`, or
//! `false`. No cross-entity integrity is enforced; `genre_ids` on
//! [`Movie`] are plain numbers, not references to [`Genre`] records.

use moviedb_api::{
    CastResponse, CreditsResponse, GenreResponse, MovieDetailResponse, MovieListResponse,
    MovieResponse, ProductionCompanyResponse, ProductionCountryResponse, SpokenLanguageResponse,
};

/// A movie entry within a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Adult flag.
    pub adult: bool,
    /// Backdrop image path.
    pub backdrop_path: String,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// TMDB movie ID.
    pub id: u64,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Original title.
    pub original_title: String,
    /// Overview text.
    pub overview: String,
    /// Popularity score.
    pub popularity: f64,
    /// Poster image path.
    pub poster_path: String,
    /// Release date (YYYY-MM-DD).
    pub release_date: String,
    /// Localized title.
    pub title: String,
    /// Video flag.
    pub video: bool,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

impl From<MovieResponse> for Movie {
    fn from(response: MovieResponse) -> Self {
        Self {
            adult: response.adult.unwrap_or_default(),
            backdrop_path: response.backdrop_path.unwrap_or_default(),
            genre_ids: response.genre_ids.unwrap_or_default(),
            id: response.id.unwrap_or_default(),
            original_language: response.original_language.unwrap_or_default(),
            original_title: response.original_title.unwrap_or_default(),
            overview: response.overview.unwrap_or_default(),
            popularity: response.popularity.unwrap_or_default(),
            poster_path: response.poster_path.unwrap_or_default(),
            release_date: response.release_date.unwrap_or_default(),
            title: response.title.unwrap_or_default(),
            video: response.video.unwrap_or_default(),
            vote_average: response.vote_average.unwrap_or_default(),
            vote_count: response.vote_count.unwrap_or_default(),
        }
    }
}

/// One page of a paginated movie listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePage {
    /// Page number reported by the API.
    pub page: u32,
    /// Movies on this page.
    pub results: Vec<Movie>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results across all pages.
    pub total_results: u32,
}

impl From<MovieListResponse> for MoviePage {
    fn from(response: MovieListResponse) -> Self {
        Self {
            page: response.page.unwrap_or_default(),
            results: response
                .results
                .unwrap_or_default()
                .into_iter()
                .map(Movie::from)
                .collect(),
            total_pages: response.total_pages.unwrap_or_default(),
            total_results: response.total_results.unwrap_or_default(),
        }
    }
}

/// Genre record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

impl From<GenreResponse> for Genre {
    fn from(response: GenreResponse) -> Self {
        Self {
            id: response.id.unwrap_or_default(),
            name: response.name.unwrap_or_default(),
        }
    }
}

/// Production company record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Logo image path.
    pub logo_path: String,
    /// Company name.
    pub name: String,
    /// Origin country (ISO 3166-1).
    pub origin_country: String,
}

impl From<ProductionCompanyResponse> for ProductionCompany {
    fn from(response: ProductionCompanyResponse) -> Self {
        Self {
            id: response.id.unwrap_or_default(),
            logo_path: response.logo_path.unwrap_or_default(),
            name: response.name.unwrap_or_default(),
            origin_country: response.origin_country.unwrap_or_default(),
        }
    }
}

/// Production country record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionCountry {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

impl From<ProductionCountryResponse> for ProductionCountry {
    fn from(response: ProductionCountryResponse) -> Self {
        Self {
            iso_3166_1: response.iso_3166_1.unwrap_or_default(),
            name: response.name.unwrap_or_default(),
        }
    }
}

/// Spoken language record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpokenLanguage {
    /// English name of the language.
    pub english_name: String,
    /// Language code (ISO 639-1).
    pub iso_639_1: String,
    /// Native name of the language.
    pub name: String,
}

impl From<SpokenLanguageResponse> for SpokenLanguage {
    fn from(response: SpokenLanguageResponse) -> Self {
        Self {
            english_name: response.english_name.unwrap_or_default(),
            iso_639_1: response.iso_639_1.unwrap_or_default(),
            name: response.name.unwrap_or_default(),
        }
    }
}

/// Full movie detail record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetail {
    /// Adult flag.
    pub adult: bool,
    /// Backdrop image path.
    pub backdrop_path: String,
    /// Production budget in USD.
    pub budget: u64,
    /// Genres. Null entries in the wire response are filtered out.
    pub genres: Vec<Genre>,
    /// Official homepage URL.
    pub homepage: String,
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Original title.
    pub original_title: String,
    /// Overview text.
    pub overview: String,
    /// Popularity score.
    pub popularity: f64,
    /// Poster image path.
    pub poster_path: String,
    /// Production companies.
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Release date (YYYY-MM-DD).
    pub release_date: String,
    /// Worldwide revenue in USD.
    pub revenue: u64,
    /// Runtime in minutes.
    pub runtime: u32,
    /// Spoken languages.
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Release status (e.g. "Released").
    pub status: String,
    /// Tagline.
    pub tagline: String,
    /// Localized title.
    pub title: String,
    /// Video flag.
    pub video: bool,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

impl From<MovieDetailResponse> for MovieDetail {
    fn from(response: MovieDetailResponse) -> Self {
        Self {
            adult: response.adult.unwrap_or_default(),
            backdrop_path: response.backdrop_path.unwrap_or_default(),
            budget: response.budget.unwrap_or_default(),
            genres: response
                .genres
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(Genre::from)
                .collect(),
            homepage: response.homepage.unwrap_or_default(),
            id: response.id.unwrap_or_default(),
            imdb_id: response.imdb_id.unwrap_or_default(),
            original_language: response.original_language.unwrap_or_default(),
            original_title: response.original_title.unwrap_or_default(),
            overview: response.overview.unwrap_or_default(),
            popularity: response.popularity.unwrap_or_default(),
            poster_path: response.poster_path.unwrap_or_default(),
            production_companies: response
                .production_companies
                .unwrap_or_default()
                .into_iter()
                .map(ProductionCompany::from)
                .collect(),
            production_countries: response
                .production_countries
                .unwrap_or_default()
                .into_iter()
                .map(ProductionCountry::from)
                .collect(),
            release_date: response.release_date.unwrap_or_default(),
            revenue: response.revenue.unwrap_or_default(),
            runtime: response.runtime.unwrap_or_default(),
            spoken_languages: response
                .spoken_languages
                .unwrap_or_default()
                .into_iter()
                .map(SpokenLanguage::from)
                .collect(),
            status: response.status.unwrap_or_default(),
            tagline: response.tagline.unwrap_or_default(),
            title: response.title.unwrap_or_default(),
            video: response.video.unwrap_or_default(),
            vote_average: response.vote_average.unwrap_or_default(),
            vote_count: response.vote_count.unwrap_or_default(),
        }
    }
}

/// A single cast entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cast {
    /// Credit-local cast ID.
    pub cast_id: u32,
    /// Character name.
    pub character: String,
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Billing order (0 = top billing).
    pub order: u32,
    /// Original (untranslated) name.
    pub original_name: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: String,
}

impl From<CastResponse> for Cast {
    fn from(response: CastResponse) -> Self {
        Self {
            cast_id: response.cast_id.unwrap_or_default(),
            character: response.character.unwrap_or_default(),
            id: response.id.unwrap_or_default(),
            name: response.name.unwrap_or_default(),
            order: response.order.unwrap_or_default(),
            original_name: response.original_name.unwrap_or_default(),
            popularity: response.popularity.unwrap_or_default(),
            profile_path: response.profile_path.unwrap_or_default(),
        }
    }
}

/// Cast credits for a movie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credits {
    /// Cast entries in response order.
    pub cast: Vec<Cast>,
    /// TMDB movie ID the credits belong to.
    pub id: u64,
}

impl From<CreditsResponse> for Credits {
    fn from(response: CreditsResponse) -> Self {
        Self {
            cast: response
                .cast
                .unwrap_or_default()
                .into_iter()
                .map(Cast::from)
                .collect(),
            id: response.id.unwrap_or_default(),
        }
    }
}
