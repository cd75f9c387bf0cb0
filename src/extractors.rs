use std::convert::Infallible;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, Uri},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{names, rejections::AppError};

/// JSON body whose rejections use the API's error envelope.
///
/// A body that cannot be read is a 400; anything that reads but does not parse
/// into `T` (wrong content type, bad syntax, missing fields) is a 422.
pub struct JsonBody<T>(pub T);

impl<S: Send + Sync, T: DeserializeOwned> FromRequest<S> for JsonBody<T> {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::BytesRejection(e)) => {
                tracing::warn!("failed to read request body: {e}");
                Err(AppError::BadRequest("failed to read request body"))
            }
            Err(e) => {
                tracing::warn!("rejected json body: {e}");
                Err(AppError::Unprocessable("malformed json body"))
            }
        }
    }
}

/// The `page` query parameter. Missing or non-numeric values mean the first page.
pub struct Page(pub i64);

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Page(page_from_uri(&parts.uri)))
    }
}

fn page_from_uri(uri: &Uri) -> i64 {
    Query::<PageQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(query)| query.page)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(names::DEFAULT_PAGE)
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::page_from_uri;

    fn page(uri: &'static str) -> i64 {
        page_from_uri(&Uri::from_static(uri))
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(page("/questions"), 1);
        assert_eq!(page("/questions?"), 1);
        assert_eq!(page("/questions?page=abc"), 1);
        assert_eq!(page("/questions?sort=asc"), 1);
    }

    #[test]
    fn page_is_url_decoded() {
        assert_eq!(page("/questions?page=%32"), 2);
        assert_eq!(page("/questions?sort=asc&page=1000"), 1000);
        assert_eq!(page("/questions?page=+3"), 3);
        assert_eq!(page("/questions?page=-2"), -2);
    }
}
