use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::model::Book;
use crate::store::BookStore;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// The path id arrives as a raw segment so that a non-integer id surfaces as
/// an explicit [`ApiError::InvalidId`] rather than a generic extractor
/// rejection.
fn parse_book_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// GET /books
pub async fn list_books<S: BookStore>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = store.list_books().await?;
    Ok(Json(books))
}

/// GET /books/:id
pub async fn get_book<S: BookStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&id)?;
    let book = store.get_book(id).await?;
    Ok(Json(book))
}

/// POST /books/new
pub async fn add_book<S: BookStore>(
    State(store): State<AppState<S>>,
    body: Result<Json<Book>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(mut book) = body?;

    // A client-supplied id is ignored; the store assigns the real one.
    let id = store.add_book(&book).await?;
    book.id = Some(id);

    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/:id
pub async fn update_book<S: BookStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<Book>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let id = parse_book_id(&id)?;
    let Json(mut book) = body?;

    let affected = store.update_book(id, &book).await?;
    if affected == 0 {
        return Err(ApiError::NotFound(id));
    }
    book.id = Some(id);

    // 201 rather than 200 is the wire contract inherited from the first
    // release; existing clients depend on it.
    Ok((StatusCode::CREATED, Json(book)))
}

/// DELETE /books/:id
pub async fn delete_book<S: BookStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_book_id(&id)?;

    let removed = store.delete_book(id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_integer_id() {
        assert_eq!(parse_book_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_a_non_numeric_id() {
        match parse_book_id("not-a-number") {
            Err(ApiError::InvalidId(raw)) => assert_eq!(raw, "not-a-number"),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn rejects_an_overflowing_id() {
        assert!(parse_book_id("99999999999999999999").is_err());
    }
}
