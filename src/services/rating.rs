use std::collections::HashMap;

use crate::models::{RatedFilm, Review};

/// Fewest reviews a film needs to be recommended
pub const MIN_REVIEW_COUNT: usize = 5;
/// Average rating a film must exceed to be recommended
pub const MIN_AVERAGE_RATING: f64 = 4.0;
/// Decimal places averages are rounded to
pub const RATING_DECIMALS: i32 = 2;

/// Mean rating of `reviews`, rounded to `RATING_DECIMALS`; 0 when empty
pub fn average(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    let total: f64 = reviews.iter().map(|r| r.rating).sum();
    round_to(total / reviews.len() as f64, RATING_DECIMALS)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl RatedFilm {
    pub fn new(film_id: i64, reviews: &[Review]) -> Self {
        Self {
            film_id,
            review_count: reviews.len(),
            average_rating: average(reviews),
        }
    }
}

pub fn is_highly_rated(film: &RatedFilm) -> bool {
    film.review_count >= MIN_REVIEW_COUNT && film.average_rating > MIN_AVERAGE_RATING
}

/// Annotates each candidate with its reviews and keeps the highly rated ones.
///
/// Candidate order is preserved. Candidates absent from `reviews` have no
/// reviews and are dropped.
pub fn filter_highly_rated(
    candidates: &[i64],
    mut reviews: HashMap<i64, Vec<Review>>,
) -> Vec<RatedFilm> {
    candidates
        .iter()
        .map(|id| RatedFilm::new(*id, &reviews.remove(id).unwrap_or_default()))
        .filter(is_highly_rated)
        .collect()
}
