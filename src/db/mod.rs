pub mod films;
pub mod sqlite;

pub use films::SqliteFilmStore;
pub use sqlite::create_pool;

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{FilmDetails, Page, SeedFilm},
};

/// Read access to the film catalogue
///
/// The recommendation pipeline only ever reads films; the schema is owned
/// and populated elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FilmStore: Send + Sync {
    /// Looks up the release date and genre of a single film
    async fn get_film(&self, id: i64) -> AppResult<Option<SeedFilm>>;

    /// Ids of films sharing `genre_id` released within the window around
    /// `release_date`, excluding `exclude_id`, ascending by id
    async fn find_candidates(
        &self,
        genre_id: i64,
        release_date: NaiveDate,
        exclude_id: i64,
    ) -> AppResult<Vec<i64>>;

    /// Full display rows for the ids on `page`, ascending by id
    ///
    /// `ids` is cut down to `page` before the genre join, so a film whose
    /// genre cannot be resolved is left out and its slot is not backfilled
    /// from later ids; such a page comes back short.
    async fn hydrate(&self, ids: &[i64], page: Page) -> AppResult<Vec<FilmDetails>>;
}
