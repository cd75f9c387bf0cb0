pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;

use std::sync::Arc;

use axum::{middleware, Router};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn db::Repository>,
}

impl AppState {
    pub fn new(db: impl db::Repository) -> Self {
        Self { db: Arc::new(db) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .fallback(rejections::not_found)
        .layer(middleware::from_fn(cors_headers))
        .with_state(state)
}

async fn cors_headers(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{header, HeaderValue, Method, StatusCode};
    use axum::response::IntoResponse;

    // Preflight requests never reach a handler
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(names::ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(names::ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(names::ALLOW_METHODS),
    );

    response
}
