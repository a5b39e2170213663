use thiserror::Error;

/// Failure modes surfaced by the API client.
///
/// Unresolved item IDs are *not* errors: the API reports them in the
/// `unresolvedItems` list of a multi response and they stay out of `items`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP-level failure. Never retried by this crate; a failed
    /// chunk aborts its whole batch.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected schema.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),

    /// Request options could not be encoded as a query string.
    #[error("unable to serialize query parameters: {0}")]
    InvalidQuery(String),
}

/// A response field failed validation, with the path of the offending field
/// (e.g. `entries[3].pricePerUnit`).
#[derive(Debug, Error)]
#[error("schema validation failed at `{path}`: {message}")]
pub struct SchemaValidationError {
    pub path: String,
    pub message: String,
}
