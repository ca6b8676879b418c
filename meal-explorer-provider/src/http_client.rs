//! HTTP request helpers
//!
//! One GET per logical query: send, check the status, read the body, parse
//! JSON. Each step maps its failure to a distinct [`FetchError`] variant and
//! logs it; nothing here retries.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `action` - query name, for logging
    /// * `url` - full request URL, for logging
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(FetchError::NetworkError | Timeout)` - transport failure
    /// * `Err(FetchError::HttpStatus)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        action: &str,
        url: &str,
    ) -> Result<String, FetchError> {
        log::debug!("[mealdb] GET {url} ({action})");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                FetchError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[mealdb] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[mealdb] Response Body: {}", truncate_for_log(&response_text));

        Ok(response_text)
    }

    /// Parse a JSON response body
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(FetchError::ParseError)` - malformed JSON or shape mismatch
    pub fn parse_json<T>(response_text: &str, action: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[mealdb] {action}: JSON parse failed: {e}");
            log::error!("[mealdb] Raw response: {}", truncate_for_log(response_text));
            FetchError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn parse_json_valid_object() {
        let result: Result<Value, FetchError> =
            HttpUtils::parse_json(r#"{"meals":[{"idMeal":"1"}]}"#, "test");
        assert!(
            matches!(&result, Ok(v) if v["meals"][0]["idMeal"] == "1"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_null_payload_is_valid() {
        let result: Result<Value, FetchError> = HttpUtils::parse_json(r#"{"meals":null}"#, "test");
        assert!(matches!(&result, Ok(v) if v["meals"].is_null()));
    }

    #[test]
    fn parse_json_malformed() {
        let result: Result<Value, FetchError> = HttpUtils::parse_json("<html>oops</html>", "test");
        assert!(
            matches!(&result, Err(FetchError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
