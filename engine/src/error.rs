use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use serde::Serialize;
use std::error::Error;
use utoipa::ToSchema;

#[derive(thiserror::Error)]
#[error("there was an error running the endpoint")]
pub struct ServiceError<T: Error>(Report<T>);

impl<T: Error> std::fmt::Debug for ServiceError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<Report<T>> for ServiceError<T>
where
    T: Error,
{
    fn from(value: Report<T>) -> Self {
        Self(value)
    }
}

impl<T: Error> IntoResponse for ServiceError<T> {
    fn into_response(self) -> axum::response::Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// A client error the endpoint detected itself, carrying enough metadata
/// for callers to tell error kinds apart without parsing the message.
#[derive(Debug, Serialize, ToSchema)]
pub struct EntityAlert {
    entity_name: &'static str,
    error_key: &'static str,
    message: String,
}

impl EntityAlert {
    pub fn bad_request(
        entity_name: &'static str,
        error_key: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity_name,
            error_key,
            message: message.into(),
        }
    }
}

impl IntoResponse for EntityAlert {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
