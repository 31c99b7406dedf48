/// Blocking HTTP client for OpenHub info lookups.
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use super::endpoint::{Kind, info_url};
use super::errors::ApiError;
use crate::xml;

/// Fixed per-request timeout. A timeout surfaces as `ApiError::Http`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A client for one-shot OpenHub info lookups.
///
/// Holds the API key explicitly; never reads the environment itself.
pub struct InfoClient {
    api_key: String,
    http: Client,
}

impl InfoClient {
    /// Construct a client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            api_key: api_key.into(),
            http,
        })
    }

    /// Fetch and decode info about a project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure, a non-success status, or a
    /// malformed response body.
    pub fn project_info(&self, project_id: &str) -> Result<Value, ApiError> {
        self.info(Kind::Project, project_id)
    }

    /// Fetch and decode info about an account (user).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure, a non-success status, or a
    /// malformed response body.
    pub fn account_info(&self, account_id: &str) -> Result<Value, ApiError> {
        self.info(Kind::Account, account_id)
    }

    fn info(&self, kind: Kind, id: &str) -> Result<Value, ApiError> {
        let url = info_url(kind, id, &self.api_key);
        let body = self.fetch(&url)?;
        xml::to_value(&body)
    }

    /// Single GET, no retries. The XML converter never runs unless the
    /// status was a success.
    fn fetch(&self, url: &str) -> Result<String, ApiError> {
        let response = self.http.get(url).send()?;
        check_status(response.status(), url)?;
        Ok(response.text()?)
    }
}

/// Map a response status to the fetch outcome.
fn check_status(status: StatusCode, url: &str) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            url: url.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.openhub.net/p/x.xml?api_key=k";

    #[test]
    fn test_success_status_passes() {
        assert!(check_status(StatusCode::OK, URL).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT, URL).is_ok());
    }

    #[test]
    fn test_not_found_is_an_error_not_empty_data() {
        let err = check_status(StatusCode::NOT_FOUND, URL).unwrap_err();
        match err {
            ApiError::Status { status, url } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(url, URL);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_server_error_is_an_error() {
        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR, URL).unwrap_err();
        assert!(matches!(err, ApiError::Status { .. }));
    }

    #[test]
    fn test_status_error_names_status_and_url() {
        let msg = check_status(StatusCode::UNAUTHORIZED, URL)
            .unwrap_err()
            .to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains(URL));
    }
}
