//! Shared response plumbing for both backends.

use crate::error::StoreError;

pub(crate) struct ResponseParts {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

/// Collect status, content type, and body text from a response. Failing to
/// read the body is a transport failure, not a malformed payload.
pub(crate) async fn response_parts(
    response: reqwest::Response,
    context: &'static str,
) -> Result<ResponseParts, StoreError> {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let body = response
        .text()
        .await
        .map_err(|e| StoreError::Unavailable {
            context,
            detail: e.to_string(),
        })?;

    Ok(ResponseParts {
        status,
        content_type,
        body,
    })
}

pub(crate) fn unavailable(context: &'static str, error: reqwest::Error) -> StoreError {
    StoreError::Unavailable {
        context,
        detail: error.to_string(),
    }
}
