//! RFC 7807 style error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub detail: String,
}

fn problem(status: StatusCode, title: &str, detail: impl Into<String>) -> Response {
    let body = ProblemDetails {
        title: title.to_string(),
        status: status.as_u16(),
        detail: detail.into(),
    };
    (status, Json(body)).into_response()
}

pub fn not_found(detail: impl Into<String>) -> Response {
    problem(StatusCode::NOT_FOUND, "Not Found", detail)
}

pub fn internal_error(detail: impl Into<String>) -> Response {
    problem(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
}
