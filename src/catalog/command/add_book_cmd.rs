use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookDetails;
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogResult, CatalogService};
use crate::core::command::Command;

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author_first_name: String,
    pub(crate) author_last_name: String,
    #[serde(default)]
    pub(crate) genre: Option<String>,
    #[serde(default)]
    pub(crate) published_year: Option<i64>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author_first_name: &str, author_last_name: &str) -> Self {
        Self {
            title: title.to_string(),
            author_first_name: author_first_name.to_string(),
            author_last_name: author_last_name.to_string(),
            genre: None,
            published_year: None,
        }
    }

    pub fn build_book(&self) -> BookDetails {
        BookDetails {
            title: self.title.to_string(),
            author_first_name: self.author_first_name.to_string(),
            author_last_name: self.author_last_name.to_string(),
            genre: self.genre.clone(),
            published_year: self.published_year,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> CatalogResult<AddBookCommandResponse> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map(AddBookCommandResponse::new)
    }
}
