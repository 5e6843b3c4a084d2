use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default end index when no `limit` is given
pub const DEFAULT_LIMIT: usize = 10;

/// Pagination window over the highly rated films.
///
/// `limit` is an end index, not a page size: the page is
/// `items[offset..limit]`, so `offset=2, limit=5` yields three items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Returns `items[offset..limit]`, clamped to the slice length
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.limit.min(items.len());
        if self.offset >= end {
            return &[];
        }
        &items[self.offset..end]
    }
}

/// A film recommended to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub tagline: Option<String>,
    pub revenue: Option<i64>,
    pub budget: Option<i64>,
    pub runtime: Option<i64>,
    pub original_language: Option<String>,
    pub status: Option<String>,
    /// Genre name
    pub genre: String,
    pub average_rating: f64,
    /// Number of reviews
    pub reviews: usize,
}

/// Body of a successful recommendations response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    pub meta: Page,
}
