//! Review data providers
//!
//! The recommendation pipeline enriches candidate films with reviews from an
//! external service. Providers are swappable so the pipeline can be exercised
//! against an in-process fake.

use std::collections::HashMap;

use crate::{error::AppResult, models::Review};

pub mod reviews_api;

pub use reviews_api::ReviewsApiClient;

/// Trait for review data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Fetch reviews for all `film_ids` in a single request
    ///
    /// Films the provider knows nothing about are absent from the map. Any
    /// transport or payload failure fails the whole call; there are no
    /// partial results.
    async fn fetch_reviews(&self, film_ids: &[i64]) -> AppResult<HashMap<i64, Vec<Review>>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
