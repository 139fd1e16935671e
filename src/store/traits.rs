use crate::model::Book;
use crate::store::error::StoreError;

/// Durable storage for [`Book`] records behind the five catalog operations.
///
/// Implementations own their backing connection (or pool) and are injected
/// into the handlers as `Arc<S>`, which keeps the HTTP layer testable with a
/// substitute store.
#[async_trait::async_trait]
pub trait BookStore: Send + Sync {
    /// Returns every book in the catalog, in backend order. An empty catalog
    /// yields an empty vec, never an error.
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;

    /// Fetches a single book, failing with [`StoreError::NotFound`] when no
    /// row matches `id`.
    async fn get_book(&self, id: i32) -> Result<Book, StoreError>;

    /// Persists a new book and returns the id the store assigned to it. Any
    /// id already set on `book` is ignored.
    async fn add_book(&self, book: &Book) -> Result<i32, StoreError>;

    /// Overwrites every non-id field of the row matching `id` and returns the
    /// affected-row count. A missing id is not a store error; callers decide
    /// whether zero affected rows means anything.
    async fn update_book(&self, id: i32, book: &Book) -> Result<u64, StoreError>;

    /// Removes the row matching `id` if present and returns the affected-row
    /// count. Deleting a missing id is not a store error.
    async fn delete_book(&self, id: i32) -> Result<u64, StoreError>;
}
