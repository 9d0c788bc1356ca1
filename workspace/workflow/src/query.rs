//! Form-input validation for the predict form.

use common::PredictRequest;

use crate::error::PredictError;

/// Builds a predict request from raw form input.
///
/// The locality must be non-empty after trimming and the year must parse as
/// an integer; anything else is a [`PredictError::Validation`] and no
/// request is formed.
pub fn parse_query(locality: &str, year_input: &str) -> Result<PredictRequest, PredictError> {
    let locality = locality.trim();
    if locality.is_empty() {
        return Err(PredictError::Validation(
            "locality must not be empty".to_string(),
        ));
    }

    let year: i32 = year_input.trim().parse().map_err(|_| {
        PredictError::Validation(format!("year must be a whole number, got {year_input:?}"))
    })?;

    Ok(PredictRequest {
        locality: locality.to_string(),
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_accepts_valid_input() {
        let request = parse_query("Richmond", "2020").expect("Should parse valid input");
        assert_eq!(request.locality, "Richmond");
        assert_eq!(request.year, 2020);
    }

    #[test]
    fn test_parse_query_trims_whitespace() {
        let request = parse_query("  Brunswick ", " 2023\n").expect("Should parse padded input");
        assert_eq!(request.locality, "Brunswick");
        assert_eq!(request.year, 2023);
    }

    #[test]
    fn test_parse_query_rejects_empty_locality() {
        let result = parse_query("   ", "2020");
        assert!(matches!(result, Err(PredictError::Validation(_))));
    }

    #[test]
    fn test_parse_query_rejects_non_integer_year() {
        for bad in ["", "soon", "20.5", "2e3"] {
            let result = parse_query("Richmond", bad);
            assert!(
                matches!(result, Err(PredictError::Validation(_))),
                "{bad:?} should not parse as a year"
            );
        }
    }
}
