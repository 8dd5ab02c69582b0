use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::BookDetails;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogError, CatalogResult, CatalogService};
use crate::core::domain::Identifiable;
use crate::core::library::LibraryError;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> CatalogResult<Vec<BookDto>> {
        let records = self.book_repository.find_all().await
            .map_err(|err| internal(err, "listing the books"))?;
        Ok(records.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookDto> {
        match self.book_repository.get(id).await {
            Ok(Some(book)) => Ok(BookDto::from(&book)),
            Ok(None) => Err(CatalogError::not_found(format!("No book with id {} found", id).as_str())),
            Err(err) => Err(internal(err, "retrieving the book")),
        }
    }

    async fn add_book(&self, book: &BookDetails) -> CatalogResult<BookDto> {
        let created = self.book_repository.create(book).await
            .map_err(|err| classify_write(err, book, "adding the book"))?;
        tracing::info!(book_id = created.id(), "book added");
        Ok(BookDto::from(&created))
    }

    async fn update_book(&self, id: i64, book: &BookDetails) -> CatalogResult<BookDto> {
        match self.book_repository.update(id, book).await {
            Ok(Some(updated)) => {
                tracing::info!(book_id = updated.id(), "book updated");
                Ok(BookDto::from(&updated))
            }
            Ok(None) => Err(CatalogError::not_found(format!("No book with id {} found", id).as_str())),
            Err(err) => Err(classify_write(err, book, "updating the book")),
        }
    }

    async fn remove_book(&self, id: i64) -> CatalogResult<()> {
        let removed = self.book_repository.delete(id).await
            .map_err(|err| internal(err, "deleting the book"))?;
        if removed == 0 {
            tracing::debug!(book_id = id, "no book to delete");
        } else {
            tracing::info!(book_id = id, "book deleted");
        }
        Ok(())
    }
}

// only a uniqueness violation is a conflict, every other storage failure is internal
fn classify_write(err: LibraryError, book: &impl Book, action: &str) -> CatalogError {
    if err.is_unique_violation() {
        tracing::warn!(title = book.title(), author = %book.author_name(), "duplicate book rejected");
        CatalogError::conflict(format!("A book with the title {} by author {} already exists",
                                       book.title(), book.author_name()).as_str())
    } else {
        internal(err, action)
    }
}

fn internal(err: LibraryError, action: &str) -> CatalogError {
    tracing::error!(error = %err, "storage failure while {}", action);
    CatalogError::internal(format!("An error occurred while {}", action).as_str())
}
