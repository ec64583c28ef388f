use rspotify::ClientError;
use rspotify::http::HttpError;
use rspotify::model::IdError;
use serde::Serialize;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a single catalog call failed. Kept clonable so that pipeline results
/// carrying a side-table failure can be compared and serialized.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cause")]
pub enum CatalogError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Path of the Spotify accounts token endpoint
const TOKEN_ENDPOINT_PATH: &str = "/api/token";

impl From<ClientError> for CatalogError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::InvalidToken => CatalogError::Authentication(err.to_string()),
            ClientError::ParseJson(_) | ClientError::Model(_) => {
                CatalogError::MalformedResponse(err.to_string())
            }
            ClientError::Http(http) => match http.as_ref() {
                // 401/403 from any endpoint, 400 (invalid_client) from the token endpoint
                HttpError::StatusCode(resp)
                    if matches!(resp.status().as_u16(), 401 | 403)
                        || (resp.status().as_u16() == 400
                            && resp.url().path() == TOKEN_ENDPOINT_PATH) =>
                {
                    CatalogError::Authentication(err.to_string())
                }
                _ => CatalogError::Network(err.to_string()),
            },
            _ => CatalogError::Network(err.to_string()),
        }
    }
}

impl From<IdError> for CatalogError {
    fn from(err: IdError) -> Self {
        CatalogError::MalformedResponse(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Search failed: {0}")]
    SearchFailed(CatalogError),

    #[error("Artist popularity side-table failed: {0}")]
    PopularitySideTableFailed(CatalogError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_maps_to_authentication() {
        let err = CatalogError::from(ClientError::InvalidToken);
        assert!(matches!(err, CatalogError::Authentication(_)));
    }

    fn status_error(status: u16) -> ClientError {
        let response = http::Response::builder()
            .status(status)
            .body("rejected")
            .unwrap();
        ClientError::Http(Box::new(HttpError::StatusCode(reqwest::Response::from(
            response,
        ))))
    }

    #[test]
    fn unauthorized_status_maps_to_authentication() {
        let err = CatalogError::from(status_error(401));
        assert!(matches!(err, CatalogError::Authentication(_)));
    }

    #[test]
    fn forbidden_status_maps_to_authentication() {
        let err = CatalogError::from(status_error(403));
        assert!(matches!(err, CatalogError::Authentication(_)));
    }

    #[test]
    fn server_errors_stay_network_failures() {
        assert!(matches!(
            CatalogError::from(status_error(502)),
            CatalogError::Network(_)
        ));
        // A bad request outside the token endpoint is not an auth rejection
        assert!(matches!(
            CatalogError::from(status_error(400)),
            CatalogError::Network(_)
        ));
    }

    #[test]
    fn json_errors_map_to_malformed_response() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CatalogError::from(ClientError::ParseJson(json_err));
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[test]
    fn side_table_failure_message_carries_cause() {
        let err = Error::PopularitySideTableFailed(CatalogError::Network("timed out".into()));
        assert_eq!(
            err.to_string(),
            "Artist popularity side-table failed: network failure: timed out"
        );
    }
}
