use std::sync::Arc;

use crate::{
    db::FilmStore,
    error::{AppError, AppResult},
    models::{RecommendationResponse, SeedFilm},
    services::{formatter, providers::ReviewProvider, rating, validation::RecommendationQuery},
};

/// Turns a validated film id into a page of highly rated similar films
///
/// Stages run strictly in order, each awaiting the previous one:
/// film lookup, candidate search, review enrichment, rating filter,
/// hydration, formatting. The first failing stage fails the whole run.
#[derive(Clone)]
pub struct RecommendationPipeline {
    store: Arc<dyn FilmStore>,
    reviews: Arc<dyn ReviewProvider>,
}

impl RecommendationPipeline {
    pub fn new(store: Arc<dyn FilmStore>, reviews: Arc<dyn ReviewProvider>) -> Self {
        Self { store, reviews }
    }

    pub async fn run(&self, query: RecommendationQuery) -> AppResult<RecommendationResponse> {
        let page = query.page;

        let film = self.fetch_film(query.film_id).await?;

        let candidates = self
            .store
            .find_candidates(film.genre_id, film.release_date, film.id)
            .await?;
        tracing::debug!(film_id = film.id, candidates = candidates.len(), "Candidates found");

        if candidates.is_empty() {
            return Ok(RecommendationResponse {
                recommendations: Vec::new(),
                meta: page,
            });
        }

        let reviews = self.reviews.fetch_reviews(&candidates).await?;
        tracing::debug!(film_id = film.id, reviewed = reviews.len(), "Reviews fetched");

        let survivors = rating::filter_highly_rated(&candidates, reviews);
        tracing::debug!(film_id = film.id, survivors = survivors.len(), "Rating filter applied");

        let survivor_ids: Vec<i64> = survivors.iter().map(|f| f.film_id).collect();
        let details = self.store.hydrate(&survivor_ids, page).await?;
        tracing::debug!(film_id = film.id, hydrated = details.len(), "Films hydrated");

        let recommendations = formatter::format(page.slice(&survivors), details);

        Ok(RecommendationResponse {
            recommendations,
            meta: page,
        })
    }

    async fn fetch_film(&self, film_id: i64) -> AppResult<SeedFilm> {
        let film = self
            .store
            .get_film(film_id)
            .await?
            .ok_or(AppError::FilmNotFound(film_id))?;

        tracing::debug!(
            film_id,
            genre_id = film.genre_id,
            release_date = %film.release_date,
            "Film fetched"
        );

        Ok(film)
    }
}
