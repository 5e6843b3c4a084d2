//! Reviews API provider
//!
//! One `GET {api_url}?films=1,2,3` per call. The service answers either with
//! an array of `{ "film_id": .., "reviews": [..] }` objects or with an object
//! keyed by film id.

use crate::{
    error::{AppError, AppResult},
    models::{FilmReviews, Review},
    services::providers::ReviewProvider,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};

#[derive(Clone)]
pub struct ReviewsApiClient {
    http_client: HttpClient,
    api_url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewsPayload {
    List(Vec<FilmReviews>),
    Map(HashMap<String, Vec<Review>>),
}

impl ReviewsPayload {
    fn into_reviews(self) -> AppResult<HashMap<i64, Vec<Review>>> {
        let mut by_film: HashMap<i64, Vec<Review>> = HashMap::new();

        match self {
            ReviewsPayload::List(films) => {
                for film in films {
                    by_film.entry(film.film_id).or_default().extend(film.reviews);
                }
            }
            ReviewsPayload::Map(films) => {
                for (key, reviews) in films {
                    let film_id = key.parse::<i64>().map_err(|_| {
                        AppError::ExternalService(format!("Invalid film id {:?} in reviews", key))
                    })?;
                    by_film.entry(film_id).or_default().extend(reviews);
                }
            }
        }

        Ok(by_film)
    }
}

impl ReviewsApiClient {
    /// Creates a client whose requests give up after `timeout`
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    fn films_param(film_ids: &[i64]) -> String {
        film_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[async_trait::async_trait]
impl ReviewProvider for ReviewsApiClient {
    async fn fetch_reviews(&self, film_ids: &[i64]) -> AppResult<HashMap<i64, Vec<Review>>> {
        let films = Self::films_param(film_ids);

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("films", films.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Reviews API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw reviews API response");

        let payload: ReviewsPayload = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize reviews response"
            );
            AppError::ExternalService(format!("Failed to parse reviews response: {}", e))
        })?;

        let reviews = payload.into_reviews()?;

        tracing::info!(
            requested = film_ids.len(),
            reviewed = reviews.len(),
            provider = self.name(),
            "Reviews fetched"
        );

        Ok(reviews)
    }

    fn name(&self) -> &'static str {
        "reviews_api"
    }
}
