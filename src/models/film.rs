use chrono::{Months, NaiveDate};

use crate::error::{AppError, AppResult};

/// How far either side of the seed film's release date candidates may fall
pub const RELEASE_WINDOW_YEARS: u32 = 15;

/// The film recommendations are requested for
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SeedFilm {
    pub id: i64,
    pub release_date: NaiveDate,
    pub genre_id: i64,
}

/// Full display row for a film, joined with its genre
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FilmDetails {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub tagline: Option<String>,
    pub revenue: Option<i64>,
    pub budget: Option<i64>,
    pub runtime: Option<i64>,
    pub original_language: Option<String>,
    pub status: Option<String>,
    pub genre_id: i64,
    pub genre_name: String,
}

/// Inclusive range of release dates considered similar to a seed film
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReleaseWindow {
    /// Window of `RELEASE_WINDOW_YEARS` on each side of `release_date`.
    ///
    /// Uses calendar months, so Feb 29 clamps to Feb 28 in non-leap years.
    pub fn around(release_date: NaiveDate) -> AppResult<Self> {
        let span = Months::new(12 * RELEASE_WINDOW_YEARS);

        let start = release_date.checked_sub_months(span);
        let end = release_date.checked_add_months(span);

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(AppError::Internal(format!(
                "Release window out of range for {}",
                release_date
            ))),
        }
    }
}
