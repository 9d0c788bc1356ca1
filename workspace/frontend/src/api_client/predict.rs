use common::{PredictRequest, PredictResponse};
use workflow::PredictError;

use crate::api_client;

/// Requests a predicted price for a locality/year pair.
///
/// One POST per call: no retry, no timeout, no backoff. A failure is
/// terminal for that submission and the user resubmits explicitly.
pub async fn predict_price(request: &PredictRequest) -> Result<PredictResponse, PredictError> {
    log::trace!(
        "Requesting prediction for {} in {}",
        request.locality,
        request.year
    );

    let result = api_client::post_json::<PredictResponse, _>("/predict", request).await;

    match &result {
        Ok(response) => log::info!(
            "Predicted price for {} in {}: {}",
            request.locality,
            request.year,
            response.predicted_price
        ),
        Err(e) => log::error!("Prediction request failed: {}", e),
    }

    result
}
