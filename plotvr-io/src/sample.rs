//! Built-in sample dataset

use log::error;
use plotvr_core::Dataset;
use std::sync::{Arc, OnceLock};

const SAMPLE_JSON: &str = include_str!("../assets/sample_data.json");

/// The dataset shown at boot without an endpoint and after a failed load
pub fn sample_dataset() -> Arc<Dataset> {
    static SAMPLE: OnceLock<Arc<Dataset>> = OnceLock::new();
    SAMPLE
        .get_or_init(|| match Dataset::from_json_str(SAMPLE_JSON) {
            Ok(dataset) => Arc::new(dataset),
            Err(err) => {
                error!("embedded sample dataset is unreadable: {err}");
                Arc::new(Dataset::new())
            }
        })
        .clone()
}
