use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogResult, CatalogService};
use crate::core::command::Command;

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> CatalogResult<ListBooksCommandResponse> {
        self.catalog_service.list_books().await.map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::utils::sql::build_test_pool;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let pool = build_test_pool().await;
        let add_cmd = AddBookCommand::new(create_catalog_service(&pool));
        let list_cmd = ListBooksCommand::new(create_catalog_service(&pool));

        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert!(res.books.is_empty());

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", "Ada", "Lovelace")).await.expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(vec![added.book], res.books);
    }
}
