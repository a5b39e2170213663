use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::error::{ApiError, SchemaValidationError};

/// Deserialize through `serde_path_to_error` so validation failures name the
/// offending field path.
pub(super) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, SchemaValidationError> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|err| SchemaValidationError {
        path: err.path().to_string(),
        message: err.inner().to_string(),
    })
}

impl Client {
    /**
    INTERNAL: Makes a GET request to the API, returning the response as a
    deserialized type.

    Waits on the shared rate limiter before sending; a caller over budget is
    delayed until the window admits it, never rejected.

    # Arguments
    - `path`: The path to the API endpoint (e.g., "/api/v2/Phoenix/5").
    - `query`: Optional query options, serialized as URL parameters.

    # Returns
    - A `Result` containing the deserialized response or an `ApiError` on failure.
    */
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&impl Serialize>,
    ) -> Result<T, ApiError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            let params = serde_urlencoded::to_string(query)
                .map_err(|err| ApiError::InvalidQuery(err.to_string()))?;
            if !params.is_empty() {
                url.push('?');
                url.push_str(&params);
            }
        }

        self.limiter.until_ready().await;

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        Ok(parse_json(&body)?)
    }
}
