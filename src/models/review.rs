use serde::{Deserialize, Serialize};

/// A single review from the reviews API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: f64,
}

impl Review {
    pub fn new(rating: f64) -> Self {
        Self { rating }
    }
}

/// Reviews for one film, as returned in the array form of the reviews API
#[derive(Debug, Clone, Deserialize)]
pub struct FilmReviews {
    pub film_id: i64,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A candidate film annotated with its review summary
#[derive(Debug, Clone, PartialEq)]
pub struct RatedFilm {
    pub film_id: i64,
    pub review_count: usize,
    pub average_rating: f64,
}
