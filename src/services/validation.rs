use crate::{
    error::{AppError, AppResult},
    models::Page,
};

/// A recommendations request whose inputs have all been parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub film_id: i64,
    pub page: Page,
}

/// Parses the raw path and query values of a recommendations request.
///
/// Every value that is present must be a non-negative integer. Missing
/// `limit` and `offset` fall back to the `Page` defaults.
pub fn validate(
    film_id: &str,
    limit: Option<&str>,
    offset: Option<&str>,
) -> AppResult<RecommendationQuery> {
    let film_id = film_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::InvalidInput(format!("film id {:?}", film_id)))?;

    let defaults = Page::default();
    let limit = parse_index("limit", limit)?.unwrap_or(defaults.limit);
    let offset = parse_index("offset", offset)?.unwrap_or(defaults.offset);

    Ok(RecommendationQuery {
        film_id,
        page: Page::new(limit, offset),
    })
}

fn parse_index(name: &str, value: Option<&str>) -> AppResult<Option<usize>> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| AppError::InvalidInput(format!("{} {:?}", name, raw)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_defaults() {
        let query = assert_ok!(validate("42", None, None));
        assert_eq!(query.film_id, 42);
        assert_eq!(query.page, Page::new(10, 0));
    }

    #[test]
    fn test_explicit_pagination() {
        let query = assert_ok!(validate("42", Some("3"), Some("1")));
        assert_eq!(query.page, Page::new(3, 1));
    }

    #[test]
    fn test_non_numeric_id() {
        assert_err!(validate("abc", None, None));
        assert_err!(validate("", None, None));
        assert_err!(validate("4x2", None, None));
    }

    #[test]
    fn test_non_numeric_pagination() {
        assert_err!(validate("42", Some("ten"), None));
        assert_err!(validate("42", None, Some("zero")));
        assert_err!(validate("42", Some(""), None));
    }

    #[test]
    fn test_negative_and_fractional_values_rejected() {
        assert_err!(validate("-1", None, None));
        assert_err!(validate("42", Some("-3"), None));
        assert_err!(validate("42", Some("2.5"), None));
    }

    #[test]
    fn test_error_is_invalid_input() {
        let error = validate("nope", None, None).unwrap_err();
        assert!(matches!(error, AppError::InvalidInput(_)));
    }
}
