use std::time::Duration;

use reqwest::Client;

use super::types::{
    PredictionRequest,
    PredictionResult,
};
use crate::core::VoltviewError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client() -> Result<Client, VoltviewError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| VoltviewError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn predict_url(endpoint: &str) -> String {
    format!("{}/predict", endpoint.trim_end_matches('/'))
}

fn root_url(endpoint: &str) -> String {
    format!("{}/", endpoint.trim_end_matches('/'))
}

/// One POST to the prediction service. Any non-2xx status or undecodable
/// body is an error; the caller decides how to surface it.
pub async fn predict(
    endpoint: &str,
    request: &PredictionRequest,
) -> Result<PredictionResult, VoltviewError> {
    let response = http_client()?.post(predict_url(endpoint)).json(request).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(VoltviewError::Http(status));
    }

    Ok(response.json::<PredictionResult>().await?)
}

/// The service answers a plain banner at its root. Used to drive the
/// online/offline indicator, nothing more.
pub async fn ping(endpoint: &str) -> Result<(), VoltviewError> {
    let response = http_client()?.get(root_url(endpoint)).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(VoltviewError::Http(status));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_url_handles_trailing_slash() {
        assert_eq!(predict_url("http://127.0.0.1:5000"), "http://127.0.0.1:5000/predict");
        assert_eq!(predict_url("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn root_url_keeps_single_slash() {
        assert_eq!(root_url("http://127.0.0.1:5000"), "http://127.0.0.1:5000/");
        assert_eq!(root_url("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/");
    }
}
