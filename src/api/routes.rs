use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::BookStore;

pub fn create_router<S: BookStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Book catalog
        .route("/books", get(handlers::list_books::<S>))
        .route("/books/new", post(handlers::add_book::<S>))
        .route("/books/:id", get(handlers::get_book::<S>))
        .route("/books/:id", put(handlers::update_book::<S>))
        .route("/books/:id", delete(handlers::delete_book::<S>))
}
