use crate::books::repository::BookRepository;
use crate::books::repository::sql_book_repository::SqlBookRepository;
use crate::utils::sql::DbPool;

pub(crate) fn create_book_repository(pool: &DbPool) -> Box<dyn BookRepository> {
    Box::new(SqlBookRepository::new(pool.clone()))
}
