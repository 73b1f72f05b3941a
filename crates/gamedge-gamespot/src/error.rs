//! Classification of GameSpot failures into `ApiError`.
//!
//! GameSpot wraps every body in an envelope with its own `status_code`. A
//! response whose envelope is not OK is rejected like a non-success status.

use gamedge_core::ApiError;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::entities::{ApiResponse, STATUS_OK};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Classify a failure raised by `reqwest` before a response was available.
pub(crate) fn transport_error(error: &reqwest::Error) -> ApiError {
    if error.is_decode() || error.is_builder() {
        ApiError::Unknown(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

/// Check the status and envelope of `response` and return its results.
pub(crate) async fn decode_results<T: DeserializeOwned>(
    response: Response,
) -> Result<Vec<T>, ApiError> {
    let status = response.status();

    if status.is_server_error() {
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(&e))?;

    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Unknown(format!("invalid response: {e}")))?;

    if envelope.status_code != STATUS_OK {
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: envelope.error,
        });
    }

    Ok(envelope.results)
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_error_is_used() {
        let body = br#"{"error": "Invalid API Key", "status_code": 100, "results": []}"#;
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, body),
            "Invalid API Key"
        );
    }

    #[test]
    fn falls_back_to_status_text() {
        assert_eq!(error_message(StatusCode::FORBIDDEN, b""), "Forbidden");
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, br#"{"error": " "}"#),
            "Forbidden"
        );
    }
}
