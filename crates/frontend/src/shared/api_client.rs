//! Thin HTTP layer over `gloo-net` with a typed error.
//!
//! Every request failure ends up as an [`ApiError`]. Screens never show the
//! detailed `Display` text; they show [`ApiError::user_message`] and the
//! detail goes to the log.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Http { status: u16 },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    /// Delete + create update: the delete went through, the create did not
    #[error("record #{deleted_id} was deleted but could not be created again: {cause}")]
    PartialUpdate { deleted_id: i64, cause: Box<ApiError> },
}

/// What the user was doing when a request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl ApiError {
    /// Generic, user-facing text for a failed operation.
    pub fn user_message(&self, operation: Operation) -> String {
        let base = match operation {
            Operation::Load => "Failed to load data",
            Operation::Create => "Failed to create the record",
            Operation::Update => "Failed to save the record",
            Operation::Delete => "Failed to delete the record",
        };
        match self {
            ApiError::PartialUpdate { .. } => {
                format!("{}: the original record was deleted and could not be created again", base)
            }
            ApiError::Http { status: 404 } if operation != Operation::Load => {
                format!("{}: it no longer exists", base)
            }
            ApiError::Network(_) => format!("{}: the server is unreachable", base),
            _ => base.to_string(),
        }
    }
}

/// HTTP verb of a write request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Http {
            status: response.status(),
        })
    }
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST/PUT `body` as JSON. The response body is ignored.
pub async fn send_json(method: WriteMethod, url: &str, body: &Value) -> Result<(), ApiError> {
    let builder: RequestBuilder = match method {
        WriteMethod::Post => Request::post(url),
        WriteMethod::Put => Request::put(url),
    };
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)
}

/// DELETE `url`.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let http = ApiError::Http { status: 500 };
        assert_eq!(http.user_message(Operation::Load), "Failed to load data");
        assert_eq!(
            ApiError::Http { status: 404 }.user_message(Operation::Delete),
            "Failed to delete the record: it no longer exists"
        );
        assert_eq!(
            ApiError::Network("offline".into()).user_message(Operation::Create),
            "Failed to create the record: the server is unreachable"
        );
    }

    #[test]
    fn test_partial_update_message() {
        let err = ApiError::PartialUpdate {
            deleted_id: 4,
            cause: Box::new(ApiError::Network("offline".into())),
        };
        assert_eq!(
            err.user_message(Operation::Update),
            "Failed to save the record: the original record was deleted and could not be created again"
        );
        assert_eq!(
            err.to_string(),
            "record #4 was deleted but could not be created again: failed to send request: offline"
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = ApiError::Decode("expected value at line 1".into());
        assert_eq!(err.to_string(), "failed to parse response: expected value at line 1");
    }
}
