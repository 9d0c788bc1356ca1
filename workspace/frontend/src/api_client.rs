pub mod dataset;
pub mod predict;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use workflow::PredictError;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common GET request handler. Success is any 2xx response whose body
/// deserializes as `T`; everything else maps into the submission error
/// taxonomy.
pub async fn get_json<T>(endpoint: &str) -> Result<T, PredictError>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error = PredictError::Network(e.to_string());
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    if !response.ok() {
        let error = PredictError::Service(format!("HTTP {}", response.status()));
        log::error!("GET {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let parsed: T = response.json().await.map_err(|e| {
        let error = PredictError::Service(format!("unreadable response body: {}", e));
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(parsed)
}

/// Common POST request handler with a JSON body.
pub async fn post_json<T, B>(endpoint: &str, body: &B) -> Result<T, PredictError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error = PredictError::Network(format!("failed to encode request: {}", e));
            log::error!("POST {} - {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = PredictError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?;

    if !response.ok() {
        let error = PredictError::Service(format!("HTTP {}", response.status()));
        log::error!("POST {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let parsed: T = response.json().await.map_err(|e| {
        let error = PredictError::Service(format!("unreadable response body: {}", e));
        log::error!("POST {} - {}", endpoint, error);
        error
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}
