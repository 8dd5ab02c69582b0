use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookDetails;
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogResult, CatalogService};
use crate::core::command::Command;

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// UpdateBookCommandRequest carries the whole book, fields left out are cleared
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: i64,
    pub title: String,
    pub author_first_name: String,
    pub author_last_name: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub published_year: Option<i64>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, title: &str, author_first_name: &str, author_last_name: &str) -> Self {
        Self {
            book_id,
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
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> CatalogResult<UpdateBookCommandResponse> {
        let book = req.build_book();
        self.catalog_service.update_book(req.book_id, &book).await.map(UpdateBookCommandResponse::new)
    }
}
