use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::FilmStore,
    error::AppResult,
    models::{FilmDetails, Page, ReleaseWindow, SeedFilm},
};

const DETAILS_SELECT: &str = r#"
    SELECT film.id, film.title, film.release_date, film.tagline, film.revenue,
           film.budget, film.runtime, film.original_language, film.status,
           film.genre_id, genre.name AS genre_name
    FROM film
    INNER JOIN genre ON genre.id = film.genre_id
"#;

/// `FilmStore` backed by the SQLite `film` and `genre` tables
#[derive(Clone)]
pub struct SqliteFilmStore {
    pool: SqlitePool,
}

impl SqliteFilmStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FilmStore for SqliteFilmStore {
    async fn get_film(&self, id: i64) -> AppResult<Option<SeedFilm>> {
        let film = sqlx::query_as::<_, SeedFilm>(
            r#"
            SELECT id, release_date, genre_id
            FROM film
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(film)
    }

    async fn find_candidates(
        &self,
        genre_id: i64,
        release_date: NaiveDate,
        exclude_id: i64,
    ) -> AppResult<Vec<i64>> {
        let window = ReleaseWindow::around(release_date)?;

        // The genre join only enforces that the genre exists
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT film.id
            FROM film
            INNER JOIN genre ON genre.id = film.genre_id
            WHERE film.genre_id = ?
              AND film.release_date BETWEEN ? AND ?
              AND film.id != ?
            ORDER BY film.id ASC
            "#,
        )
        .bind(genre_id)
        .bind(window.start)
        .bind(window.end)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            genre_id,
            window_start = %window.start,
            window_end = %window.end,
            candidates = ids.len(),
            "Candidate search completed"
        );

        Ok(ids)
    }

    async fn hydrate(&self, ids: &[i64], page: Page) -> AppResult<Vec<FilmDetails>> {
        let page_ids = page.slice(ids);
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(DETAILS_SELECT);
        builder.push(" WHERE film.id IN (");
        let mut separated = builder.separated(", ");
        for id in page_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY film.id ASC");

        let films = builder
            .build_query_as::<FilmDetails>()
            .fetch_all(&self.pool)
            .await?;

        if films.len() != page_ids.len() {
            tracing::warn!(
                requested = page_ids.len(),
                found = films.len(),
                "Some films could not be hydrated"
            );
        }

        Ok(films)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use tokio_test::assert_ok;

    /// In-memory catalogue; one connection so every query sees the same database
    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::raw_sql(
            r#"
            CREATE TABLE genre (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );
            CREATE TABLE film (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                release_date TEXT NOT NULL,
                tagline TEXT,
                revenue INTEGER,
                budget INTEGER,
                runtime INTEGER,
                original_language TEXT,
                status TEXT,
                genre_id INTEGER
            );
            INSERT INTO genre (id, name) VALUES (1, 'Drama'), (2, 'Comedy');
            INSERT INTO film (id, title, release_date, tagline, revenue, budget, runtime, original_language, status, genre_id) VALUES
                (42, 'Seed', '1965-01-01', 'The original', 100, 50, 120, 'en', 'Released', 1),
                (3, 'Too Early', '1949-12-31', NULL, NULL, NULL, 90, 'en', 'Released', 1),
                (5, 'Lower Bound', '1950-01-01', NULL, NULL, NULL, 91, 'en', 'Released', 1),
                (9, 'Middle', '1970-05-05', 'Tagline', 2000, 1000, 100, 'fr', 'Released', 1),
                (12, 'Upper Bound', '1980-01-01', NULL, NULL, NULL, 93, 'en', 'Released', 1),
                (15, 'Too Late', '1980-01-02', NULL, NULL, NULL, 94, 'en', 'Released', 1),
                (20, 'Other Genre', '1966-01-01', NULL, NULL, NULL, 95, 'en', 'Released', 2),
                (25, 'Orphan', '1967-01-01', NULL, NULL, NULL, 96, 'en', 'Released', 99);
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_get_film() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let film = assert_ok!(store.get_film(42).await).unwrap();
        assert_eq!(film.id, 42);
        assert_eq!(film.release_date, date(1965, 1, 1));
        assert_eq!(film.genre_id, 1);
    }

    #[tokio::test]
    async fn test_get_film_missing() {
        let store = SqliteFilmStore::new(setup_test_db().await);
        let film = assert_ok!(store.get_film(1000).await);
        assert!(film.is_none());
    }

    #[tokio::test]
    async fn test_find_candidates_window_and_genre() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let ids = assert_ok!(store.find_candidates(1, date(1965, 1, 1), 42).await);
        assert_eq!(ids, vec![5, 9, 12]);
    }

    #[tokio::test]
    async fn test_find_candidates_excludes_seed() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let ids = assert_ok!(store.find_candidates(1, date(1970, 1, 1), 9).await);
        assert!(!ids.contains(&9));
        assert!(ids.contains(&42));
    }

    #[tokio::test]
    async fn test_find_candidates_requires_existing_genre() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let ids = assert_ok!(store.find_candidates(99, date(1967, 1, 1), 0).await);
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_joins_genre_name() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let films = assert_ok!(store.hydrate(&[5, 9, 12], Page::default()).await);
        assert_eq!(films.len(), 3);
        assert_eq!(films[1].id, 9);
        assert_eq!(films[1].title, "Middle");
        assert_eq!(films[1].tagline.as_deref(), Some("Tagline"));
        assert_eq!(films[1].revenue, Some(2000));
        assert_eq!(films[1].original_language.as_deref(), Some("fr"));
        assert_eq!(films[1].genre_name, "Drama");
    }

    #[tokio::test]
    async fn test_hydrate_only_fetches_page() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let films = assert_ok!(store.hydrate(&[3, 5, 9, 12, 15], Page::new(4, 2)).await);
        let ids: Vec<i64> = films.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![9, 12]);
    }

    #[tokio::test]
    async fn test_hydrate_skips_films_without_genre() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let films = assert_ok!(store.hydrate(&[9, 25], Page::default()).await);
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].id, 9);
    }

    #[tokio::test]
    async fn test_hydrate_does_not_backfill_page() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let films = assert_ok!(store.hydrate(&[9, 25, 12], Page::new(2, 0)).await);
        let ids: Vec<i64> = films.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![9]);
    }

    #[tokio::test]
    async fn test_hydrate_empty_page() {
        let store = SqliteFilmStore::new(setup_test_db().await);

        let films = assert_ok!(store.hydrate(&[5, 9], Page::new(1, 3)).await);
        assert!(films.is_empty());
    }
}
