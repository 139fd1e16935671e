use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::model::Book;
use crate::store::error::StoreError;
use crate::store::traits::BookStore;

/// In-memory [`BookStore`] substitute.
///
/// Mirrors the Postgres semantics closely enough for handler tests: ids are
/// assigned monotonically starting at 1, iteration order is id order, and
/// update/delete report affected-row counts instead of erroring on a missing
/// id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    books: BTreeMap<i32, Book>,
    next_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BookStore for MemoryStore {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.books.values().cloned().collect())
    }

    async fn get_book(&self, id: i32) -> Result<Book, StoreError> {
        let inner = self.inner.read();
        inner.books.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn add_book(&self, book: &Book) -> Result<i32, StoreError> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.books.insert(
            id,
            Book {
                id: Some(id),
                ..book.clone()
            },
        );
        Ok(id)
    }

    async fn update_book(&self, id: i32, book: &Book) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        match inner.books.get_mut(&id) {
            Some(existing) => {
                existing.title = book.title.clone();
                existing.author = book.author.clone();
                existing.publication_year = book.publication_year;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_book(&self, id: i32) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        Ok(if inner.books.remove(&id).is_some() { 1 } else { 0 })
    }
}
