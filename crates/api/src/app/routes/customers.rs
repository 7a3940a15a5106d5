use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use customers_core::CustomerName;
use customers_observability::Observation;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/:name", get(customers_by_name))
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
    uri: Uri,
) -> axum::response::Response {
    match services.customers().all().await {
        Ok(customers) => (StatusCode::OK, Json(dto::customers_to_response(customers))).into_response(),
        Err(e) => errors::error_response(e.into(), uri.path()),
    }
}

pub async fn customers_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    uri: Uri,
) -> axum::response::Response {
    let name = match CustomerName::parse(name) {
        Ok(n) => n,
        Err(e) => {
            log_request_headers(&headers);
            return errors::error_response(e.into(), uri.path());
        }
    };

    let found = Observation::new("by-name", services.observations())
        .observe_result(services.customers().by_name(&name))
        .await;

    match found {
        Ok(customers) => (StatusCode::OK, Json(dto::customers_to_response(customers))).into_response(),
        Err(e) => errors::error_response(e.into(), uri.path()),
    }
}

/// Diagnostic dump of a rejected request's headers.
fn log_request_headers(headers: &HeaderMap) {
    for (name, value) in headers {
        tracing::debug!(
            header = %name,
            value = %String::from_utf8_lossy(value.as_bytes()),
            "rejected request header"
        );
    }
}
