use async_trait::async_trait;

use crate::books::domain::model::{BookDetails, BookEntity};
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::utils::date::now_millis;
use crate::utils::sql::DbPool;

const BOOK_COLUMNS: &str = "book_id, title, author_first_name, author_last_name, genre, published_year, created_at, updated_at";

// SqlBookRepository works for any driver behind the pool, every statement
// uses $N placeholders in order so Postgres and SQLite accept the same text.
#[derive(Debug)]
pub struct SqlBookRepository {
    pool: DbPool,
}

impl SqlBookRepository {
    pub(crate) fn new(pool: DbPool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn create(&self, book: &BookDetails) -> LibraryResult<BookEntity> {
        let now = now_millis();
        let sql = format!("INSERT INTO books (title, author_first_name, author_last_name, genre, published_year, created_at, updated_at) \
                           VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}", BOOK_COLUMNS);
        // the connection goes back to the pool when the guard drops, on error paths too
        let mut conn = self.pool.acquire().await?;
        let entity = sqlx::query_as::<_, BookEntity>(sql.as_str())
            .bind(book.title.as_str())
            .bind(book.author_first_name.as_str())
            .bind(book.author_last_name.as_str())
            .bind(book.genre.clone())
            .bind(book.published_year)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *conn)
            .await?;
        Ok(entity)
    }

    async fn update(&self, id: i64, book: &BookDetails) -> LibraryResult<Option<BookEntity>> {
        let sql = format!("UPDATE books SET title = $1, author_first_name = $2, author_last_name = $3, \
                           genre = $4, published_year = $5, updated_at = $6 WHERE book_id = $7 RETURNING {}", BOOK_COLUMNS);
        let mut conn = self.pool.acquire().await?;
        let entity = sqlx::query_as::<_, BookEntity>(sql.as_str())
            .bind(book.title.as_str())
            .bind(book.author_first_name.as_str())
            .bind(book.author_last_name.as_str())
            .bind(book.genre.clone())
            .bind(book.published_year)
            .bind(now_millis())
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(entity)
    }

    async fn get(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        let sql = format!("SELECT {} FROM books WHERE book_id = $1", BOOK_COLUMNS);
        let mut conn = self.pool.acquire().await?;
        let entity = sqlx::query_as::<_, BookEntity>(sql.as_str())
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(entity)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let sql = format!("SELECT {} FROM books ORDER BY book_id", BOOK_COLUMNS);
        let mut conn = self.pool.acquire().await?;
        let records = sqlx::query_as::<_, BookEntity>(sql.as_str())
            .fetch_all(&mut *conn)
            .await?;
        Ok(records)
    }

    async fn delete(&self, id: i64) -> LibraryResult<u64> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected())
    }
}
