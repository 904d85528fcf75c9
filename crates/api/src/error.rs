use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};
use taskline_core::error::CoreError;
use taskline_core::types::DbId;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and carries persistence failures
/// with their driver source. Implements [`IntoResponse`] to produce the
/// `{ message, data?, id? }` JSON envelope used across the API.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskline_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence operation the store failed or refused.
    ///
    /// `message` is the per-action response text; `echo` is whatever
    /// request context the response body repeats back.
    #[error("{message}")]
    Persistence {
        message: &'static str,
        echo: Echo,
        #[source]
        source: sqlx::Error,
    },
}

/// Request context echoed back in a 500 body: nothing, the record id, or
/// the raw input fields submitted with the request.
#[derive(Debug)]
pub enum Echo {
    None,
    Id(DbId),
    Input(Value),
}

impl Echo {
    /// Capture the submitted input fields so a failed save can echo them
    /// back instead of a partially-constructed record.
    pub fn input<T: Serialize>(input: &T) -> Self {
        Echo::Input(serde_json::to_value(input).unwrap_or(Value::Null))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                let body = json!({
                    "message": format!("{entity} not found"),
                    "id": id,
                });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }

            AppError::Persistence {
                message,
                echo,
                source,
            } => {
                tracing::error!(error = %source, "{message}");
                let mut body = json!({ "message": message });
                match echo {
                    Echo::None => {}
                    Echo::Id(id) => body["id"] = json!(id),
                    Echo::Input(input) => body["data"] = input,
                }
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
