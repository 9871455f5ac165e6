use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("missing field `{}`", field))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// Every kind surfaces as 500 with its description as the body; clients
// rely on that contract, so validation failures are not downgraded to 4xx.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(ref msg) => {
                tracing::warn!("Rejected request: {}", msg);
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
            }
            AppError::Migration(ref e) => {
                tracing::error!("Migration error: {:?}", e);
            }
            AppError::Config(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_key() {
        let err = AppError::missing_field("inn");
        assert_eq!(err.to_string(), "missing field `inn`");
    }

    #[test]
    fn validation_maps_to_internal_server_error() {
        let response = AppError::missing_field("phone").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn database_errors_keep_their_description() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("database error: "));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_env_var_is_config_error() {
        let err = AppError::from(std::env::VarError::NotPresent);
        assert!(matches!(err, AppError::Config(_)));
    }
}
