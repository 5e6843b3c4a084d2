use std::collections::HashMap;

use crate::models::{FilmDetails, RatedFilm, Recommendation};

/// Joins highly rated films with their hydrated rows, in `survivors` order.
///
/// Survivors without a hydrated row are skipped. The genre reference is
/// replaced by the genre name.
pub fn format(survivors: &[RatedFilm], details: Vec<FilmDetails>) -> Vec<Recommendation> {
    let mut by_id: HashMap<i64, FilmDetails> =
        details.into_iter().map(|film| (film.id, film)).collect();

    survivors
        .iter()
        .filter_map(|rated| {
            by_id
                .remove(&rated.film_id)
                .map(|film| to_recommendation(film, rated))
        })
        .collect()
}

fn to_recommendation(film: FilmDetails, rated: &RatedFilm) -> Recommendation {
    Recommendation {
        id: film.id,
        title: film.title,
        release_date: film.release_date,
        tagline: film.tagline,
        revenue: film.revenue,
        budget: film.budget,
        runtime: film.runtime,
        original_language: film.original_language,
        status: film.status,
        genre: film.genre_name,
        average_rating: rated.average_rating,
        reviews: rated.review_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Review;
    use chrono::NaiveDate;

    fn details(id: i64, genre_name: &str) -> FilmDetails {
        FilmDetails {
            id,
            title: format!("Film {}", id),
            release_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            tagline: None,
            revenue: None,
            budget: None,
            runtime: Some(100),
            original_language: Some("en".to_string()),
            status: Some("Released".to_string()),
            genre_id: 1,
            genre_name: genre_name.to_string(),
        }
    }

    fn rated(id: i64) -> RatedFilm {
        RatedFilm::new(id, &vec![Review::new(5.0); 5])
    }

    #[test]
    fn test_follows_survivor_order() {
        let survivors = vec![rated(9), rated(3), rated(5)];
        let rows = vec![details(3, "Drama"), details(5, "Drama"), details(9, "Drama")];

        let ids: Vec<i64> = format(&survivors, rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
    }

    #[test]
    fn test_genre_is_name_and_ratings_attached() {
        let out = format(&[rated(3)], vec![details(3, "Western")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].genre, "Western");
        assert_eq!(out[0].average_rating, 5.0);
        assert_eq!(out[0].reviews, 5);

        let json = serde_json::to_value(&out[0]).unwrap();
        assert!(json["genre"].is_string());
        assert!(json.get("genreId").is_none());
        assert!(json.get("genreName").is_none());
    }

    #[test]
    fn test_missing_rows_are_skipped() {
        let out = format(&[rated(3), rated(4)], vec![details(4, "Drama")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 4);
    }
}
