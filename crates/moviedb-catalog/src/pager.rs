//! Page-cursor paging over the movie listing.
#![allow(clippy::future_not_send)]

use std::collections::BTreeMap;

use moviedb_api::LocalMovieApi;

use super::error::CatalogError;
use super::models::Movie;
use super::repository::MovieRepository;

/// First page number of a TMDB listing.
const FIRST_PAGE: u32 = 1;

/// One loaded page together with its adjacent page keys.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    /// Movies on this page.
    pub movies: Vec<Movie>,
    /// Key of the previous page (`None` on the first page).
    pub prev_key: Option<u32>,
    /// Key of the next page (`None` on the last page or when empty).
    pub next_key: Option<u32>,
}

/// Pages through a movie listing with an in-memory page cache.
///
/// For a requested page N with `1 <= N < total_pages`, the loaded page
/// carries `prev_key = N - 1` (or `None` at N = 1) and `next_key = N + 1`.
/// At `N >= total_pages`, or when the page comes back empty, `next_key`
/// is `None`. Loaded pages are kept in memory so scrolling back does not
/// refetch; changing the query drops the cache.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MoviePager<A> {
    /// Repository the pages are fetched through.
    repository: MovieRepository<A>,
    /// Active search query (`None` = discover listing).
    query: Option<String>,
    /// Loaded pages keyed by page number.
    pages: BTreeMap<u32, LoadedPage>,
}

impl<A: LocalMovieApi + Sync> MoviePager<A> {
    /// Creates a pager over the given repository.
    ///
    /// An empty query string is treated as no query (discover listing).
    pub fn new(repository: MovieRepository<A>, query: Option<String>) -> Self {
        Self {
            repository,
            query: query.filter(|q| !q.is_empty()),
            pages: BTreeMap::new(),
        }
    }

    /// Active search query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Replaces the query and drops all cached pages.
    ///
    /// An empty string clears the query back to the discover listing.
    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query.filter(|q| !q.is_empty());
        self.pages.clear();
    }

    /// Returns a cached page without fetching.
    #[must_use]
    pub fn cached(&self, key: u32) -> Option<&LoadedPage> {
        self.pages.get(&key)
    }

    /// Number of pages currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.pages.len()
    }

    /// Loads the page for `key` (`None` = first page).
    ///
    /// Serves the page from the cache when it was loaded before;
    /// otherwise fetches it and caches the result. A failed load is
    /// terminal for that page: nothing is cached and the error is
    /// returned as-is.
    ///
    /// # Errors
    ///
    /// Returns a classified [`CatalogError`] if the fetch fails.
    pub async fn load(&mut self, key: Option<u32>) -> Result<LoadedPage, CatalogError> {
        let page_number = key.unwrap_or(FIRST_PAGE).max(FIRST_PAGE);

        if let Some(page) = self.pages.get(&page_number) {
            tracing::debug!(page = page_number, "serving page from cache");
            return Ok(page.clone());
        }

        let result = self
            .repository
            .movie_page(self.query.as_deref(), page_number)
            .await?;

        let prev_key = (page_number > FIRST_PAGE).then(|| page_number.saturating_sub(1));
        let next_key = if result.results.is_empty() || page_number >= result.total_pages {
            None
        } else {
            Some(page_number.saturating_add(1))
        };

        let page = LoadedPage {
            movies: result.results,
            prev_key,
            next_key,
        };
        self.pages.insert(page_number, page.clone());
        Ok(page)
    }
}
