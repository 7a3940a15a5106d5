//! Error translation at the HTTP boundary.
//!
//! | error | status | `detail` |
//! |-------|--------|----------|
//! | `DomainError::Validation` | 400 | validation message |
//! | `RepositoryError` (any) | 500 | omitted; cause is logged |
//!
//! Bodies are RFC 7807 problem details (`application/problem+json`).

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use customers_core::DomainError;
use customers_infra::RepositoryError;

pub const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetail {
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            kind: "about:blank".to_string(),
            title: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, PROBLEM_JSON)], Json(self)).into_response()
    }
}

/// Translate `err` raised while serving `instance` (the request path).
pub fn error_response(err: ApiError, instance: &str) -> Response {
    let problem = match err {
        ApiError::Domain(DomainError::Validation(msg)) => {
            ProblemDetail::for_status(StatusCode::BAD_REQUEST).with_detail(msg)
        }
        ApiError::Store(e) => {
            tracing::error!(error = %e, instance, "customer store failure");
            ProblemDetail::for_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    };
    problem.with_instance(instance).into_response()
}
