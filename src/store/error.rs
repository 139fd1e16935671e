use thiserror::Error;

/// Failure modes of the record store.
///
/// The store only distinguishes logical absence from execution failure for
/// the single-row fetch, because that is the only operation whose caller
/// needs to tell "the book doesn't exist" apart from "the database is down".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("book {0} not found")]
    NotFound(i32),

    #[error("store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.into())
    }
}
