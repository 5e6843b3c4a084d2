pub mod formatter;
pub mod pipeline;
pub mod providers;
pub mod rating;
pub mod validation;

pub use pipeline::RecommendationPipeline;
pub use validation::{validate, RecommendationQuery};
