use axum::http::StatusCode;
use crate::catalog::domain::CatalogError;
use crate::core::domain::Configuration;
use crate::utils::sql::DbPool;

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) pool: DbPool,
}

impl AppState {
    pub fn new(config: Configuration, pool: DbPool) -> AppState {
        AppState {
            config,
            pool,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CatalogError::Conflict { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CatalogError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::catalog::domain::CatalogError;
    use crate::core::controller::{json_to_server_error, ServerError};

    #[tokio::test]
    async fn test_should_map_catalog_errors() {
        assert_eq!((StatusCode::NOT_FOUND, "missing".to_string()), ServerError::from(CatalogError::not_found("missing")));
        assert_eq!((StatusCode::BAD_REQUEST, "taken".to_string()), ServerError::from(CatalogError::conflict("taken")));
        assert_eq!((StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string()), ServerError::from(CatalogError::internal("oops")));
    }

    #[tokio::test]
    async fn test_should_map_json_errors() {
        let err = serde_json::from_str::<u32>("{").expect_err("should fail");
        let (status, _) = json_to_server_error(err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }
}
