pub mod service;

use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::books::domain::model::BookDetails;
use crate::books::dto::BookDto;

// CatalogError is the closed set of failures the catalog service reports.
// Storage errors are classified into one of these before they are returned.
#[derive(Debug, PartialEq)]
pub enum CatalogError {
    NotFound {
        message: String,
    },
    // The title and author pair is already taken, message names both.
    Conflict {
        message: String,
    },
    // Any other storage failure, message is generic.
    Internal {
        message: String,
    },
}

impl CatalogError {
    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn conflict(message: &str) -> CatalogError {
        CatalogError::Conflict { message: message.to_string() }
    }

    pub fn internal(message: &str) -> CatalogError {
        CatalogError::Internal { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            CatalogError::NotFound { message } => { message.as_str() }
            CatalogError::Conflict { message } => { message.as_str() }
            CatalogError::Internal { message } => { message.as_str() }
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> CatalogResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookDto>;
    async fn add_book(&self, book: &BookDetails) -> CatalogResult<BookDto>;
    async fn update_book(&self, id: i64, book: &BookDetails) -> CatalogResult<BookDto>;
    async fn remove_book(&self, id: i64) -> CatalogResult<()>;
}
