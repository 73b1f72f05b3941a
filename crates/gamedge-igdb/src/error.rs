//! Classification of HTTP failures into `ApiError`.
//!
//! - transport failures (connect, timeout, interrupted body) -> `Network`
//! - 5xx -> `Server`
//! - any other non-success status -> `Http`, with the error title from the
//!   body when there is one
//! - a success response that does not decode -> `Unknown`

use gamedge_core::ApiError;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error entry in an IGDB error response (`[{"title": ..., "status": ...}]`).
///
/// Twitch reports errors as a single object with a `message` instead.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    title: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.title.or(self.message).filter(|m| !m.trim().is_empty())
    }
}

/// Classify a failure raised by `reqwest` before a response was available.
pub(crate) fn transport_error(error: &reqwest::Error) -> ApiError {
    if error.is_decode() || error.is_builder() {
        ApiError::Unknown(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

/// Check the status of `response` and decode its JSON body.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
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

    serde_json::from_slice(&body).map_err(|e| ApiError::Unknown(format!("invalid response: {e}")))
}

/// Extract a human-readable message from an error response body.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    let from_body = serde_json::from_slice::<Vec<ErrorBody>>(body)
        .ok()
        .and_then(|errors| errors.into_iter().find_map(ErrorBody::into_message))
        .or_else(|| {
            serde_json::from_slice::<ErrorBody>(body)
                .ok()
                .and_then(ErrorBody::into_message)
        });

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
    })
}
