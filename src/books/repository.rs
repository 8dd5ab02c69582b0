pub mod sql_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookDetails, BookEntity};
use crate::core::library::LibraryResult;

// BookRepository is the storage contract of the catalog, each call is a
// single-row operation except find_all.
#[async_trait]
pub trait BookRepository: Sync + Send {
    // inserts a book and returns the stored row with its assigned id
    async fn create(&self, book: &BookDetails) -> LibraryResult<BookEntity>;

    // replaces every caller-supplied field, None when no row has the id
    async fn update(&self, id: i64, book: &BookDetails) -> LibraryResult<Option<BookEntity>>;

    async fn get(&self, id: i64) -> LibraryResult<Option<BookEntity>>;

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;

    // returns the number of rows removed, a missing id is not an error
    async fn delete(&self, id: i64) -> LibraryResult<u64>;
}
