//! Movie catalog domain layer for moviedb.
//!
//! Maps TMDB wire responses to flat domain records with deterministic
//! defaults, selects the discover or search endpoint based on the query,
//! and pages through listings with a cursor plus in-memory page cache.

mod error;
mod models;
mod pager;
mod repository;

#[allow(clippy::module_name_repetitions)]
pub use error::{CatalogError, ErrorKind};
pub use models::{
    Cast, Credits, Genre, Movie, MovieDetail, MoviePage, ProductionCompany, ProductionCountry,
    SpokenLanguage,
};
#[allow(clippy::module_name_repetitions)]
pub use pager::{LoadedPage, MoviePager};
#[allow(clippy::module_name_repetitions)]
pub use repository::MovieRepository;
