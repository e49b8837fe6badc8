extern crate serde;
extern crate serde_json;

use errors::MonitorError;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use HTTP_CLIENT;

/// GETs `url_string` and deserializes the JSON body into `T`.
///
/// Returns `Ok(None)` when the server answers 404, so callers can tell a
/// missing resource apart from a server that can't be reached.
pub fn get_url_response<T>(url_string: &str, timeout: Duration) -> Result<Option<T>, MonitorError>
where
    T: serde::de::DeserializeOwned,
{
    let url = Url::parse(url_string)
        .map_err(|e| MonitorError::unavailable(format!("Unable to parse url {}: {}", url_string, e)))?;

    let response = HTTP_CLIENT
        .get(url)
        .timeout(timeout)
        .send()
        .map_err(|e| MonitorError::unavailable(format!("HTTP call to {} failed: {}", url_string, e)))?;

    match response.status() {
        StatusCode::OK => {
            let body_string = response
                .text()
                .map_err(|e| MonitorError::unavailable(format!("Unable to read body from {}: {}", url_string, e)))?;
            let deser = serde_json::from_str::<T>(body_string.as_str()).map_err(|e| {
                MonitorError::unavailable(format!("Unable to deserialize response from {}: {}", url_string, e))
            })?;
            Ok(Some(deser))
        }
        StatusCode::NOT_FOUND => Ok(None),
        other_code => Err(MonitorError::unavailable(format!(
            "HTTP call to {} failed with code: {}",
            url_string, other_code
        ))),
    }
}
