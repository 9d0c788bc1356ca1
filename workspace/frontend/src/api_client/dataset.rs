use serde_json::{Map, Value};
use workflow::{Dataset, PredictError};

use crate::api_client;

/// One record of a published dataset, as returned by `GET /data/{name}`.
/// Column sets differ between datasets, so rows stay schemaless.
pub type DatasetRow = Map<String, Value>;

pub async fn get_dataset_rows(dataset: Dataset) -> Result<Vec<DatasetRow>, PredictError> {
    log::trace!("Fetching rows for dataset: {}", dataset.wire_name());

    let endpoint = format!("/data/{}", dataset.wire_name());
    let result = api_client::get_json::<Vec<DatasetRow>>(&endpoint).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch dataset {}: {}", dataset.wire_name(), e);
    } else {
        log::info!("Successfully fetched dataset: {}", dataset.wire_name());
    }

    result
}
