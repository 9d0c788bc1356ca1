//! Transport-layer types shared with the prediction service.
//! These structs mirror the service's request/response payloads so the
//! frontend can (de)serialize them without duplicating shapes.

use serde::{Deserialize, Serialize};

/// Request body for `POST /predict` (mirrors the service handler).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    pub locality: String,
    pub year: i32,
}

/// Successful `POST /predict` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub predicted_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_wire_shape() {
        let request = PredictRequest {
            locality: "Richmond".to_string(),
            year: 2020,
        };

        let json = serde_json::to_value(&request).expect("Should serialize request");
        assert_eq!(
            json,
            serde_json::json!({"locality": "Richmond", "year": 2020})
        );
    }

    #[test]
    fn test_predict_response_parses_fractional_price() {
        let response: PredictResponse = serde_json::from_str(r#"{"predicted_price": 850000.75}"#)
            .expect("Should parse response");
        assert_eq!(response.predicted_price, 850000.75);
    }

    #[test]
    fn test_predict_response_parses_integer_price() {
        // The service emits a bare JSON number; an integer-valued price
        // must still land in the f64 field.
        let response: PredictResponse = serde_json::from_str(r#"{"predicted_price": 900000}"#)
            .expect("Should parse response");
        assert_eq!(response.predicted_price, 900000.0);
    }

    #[test]
    fn test_predict_response_rejects_non_numeric_price() {
        let result = serde_json::from_str::<PredictResponse>(r#"{"predicted_price": "soon"}"#);
        assert!(result.is_err());
    }
}
