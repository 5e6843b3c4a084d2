pub mod film;
pub mod recommendation;
pub mod review;

pub use film::{FilmDetails, ReleaseWindow, SeedFilm};
pub use recommendation::{Page, Recommendation, RecommendationResponse};
pub use review::{FilmReviews, RatedFilm, Review};
