use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure or non-success HTTP status from the backing store.
    #[error("{context}: store unavailable: {detail}")]
    Unavailable {
        context: &'static str,
        detail: String,
    },

    /// The store responded, but the body was not the expected structured data.
    #[error(
        "{context} returned non-JSON (status={status}, content-type={content_type}). \
         Body preview: {preview}"
    )]
    MalformedResponse {
        context: &'static str,
        status: u16,
        content_type: String,
        preview: String,
    },

    /// Structured response with a non-"ok" status, surfaced verbatim.
    #[error("store rejected the request: {response}")]
    Rejected { response: String },

    /// Service-account token minting or exchange failure.
    #[error("service account auth failed: {0}")]
    Auth(String),

    #[error("column mapping error: {0}")]
    Column(#[from] triage_core::error::CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
