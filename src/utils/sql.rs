use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub type DbPool = AnyPool;

pub const BOOKS_TABLE: &str = "books";

const POSTGRES_BOOKS_DDL: &str = "CREATE TABLE IF NOT EXISTS books (
    book_id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    author_first_name TEXT NOT NULL,
    author_last_name TEXT NOT NULL,
    genre TEXT,
    published_year BIGINT,
    created_at BIGINT NOT NULL,
    updated_at BIGINT NOT NULL,
    CONSTRAINT uq_books_title_author UNIQUE (title, author_first_name, author_last_name)
)";

// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again
const SQLITE_BOOKS_DDL: &str = "CREATE TABLE IF NOT EXISTS books (
    book_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author_first_name TEXT NOT NULL,
    author_last_name TEXT NOT NULL,
    genre TEXT,
    published_year BIGINT,
    created_at BIGINT NOT NULL,
    updated_at BIGINT NOT NULL,
    CONSTRAINT uq_books_title_author UNIQUE (title, author_first_name, author_last_name)
)";

// helper method to build the connection pool shared by all requests
pub async fn build_db_pool(config: &Configuration) -> LibraryResult<DbPool> {
    install_default_drivers();
    let mut options = AnyPoolOptions::new()
        .max_connections(config.pool_size())
        .acquire_timeout(config.acquire_timeout());
    if config.is_in_memory() {
        // closing the only connection would discard the database
        options = options.idle_timeout(None).max_lifetime(None);
    }
    let pool = options.connect(config.database_url.as_str()).await?;
    tracing::info!(store = ?RepositoryStore::from_url(config.database_url.as_str()).ok(),
        max_connections = config.pool_size(), "database pool created");
    Ok(pool)
}

pub async fn create_table(pool: &DbPool, store: RepositoryStore) -> LibraryResult<()> {
    let ddl = match store {
        RepositoryStore::Postgres => POSTGRES_BOOKS_DDL,
        RepositoryStore::Sqlite => SQLITE_BOOKS_DDL,
    };
    match sqlx::query(ddl).execute(pool).await {
        Ok(_) => Ok(()),
        Err(err) => {
            Err(LibraryError::database(format!("failed to create {} table due to {}",
                                               BOOKS_TABLE, err).as_str(), None))
        }
    }
}

pub async fn delete_table(pool: &DbPool) -> LibraryResult<()> {
    match sqlx::query("DROP TABLE IF EXISTS books").execute(pool).await {
        Ok(_) => Ok(()),
        Err(err) => {
            Err(LibraryError::database(format!("failed to delete {} table due to {}",
                                               BOOKS_TABLE, err).as_str(), None))
        }
    }
}

impl From<sqlx::Error> for LibraryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    LibraryError::unique_violation(
                        db_err.message(), db_err.constraint().map(str::to_string))
                } else {
                    LibraryError::database(
                        format!("database error {}", db_err.message()).as_str(),
                        db_err.code().map(|code| code.to_string()))
                }
            }
            sqlx::Error::PoolTimedOut => {
                LibraryError::unavailable("timed out acquiring a connection", Some("PoolTimedOut".to_string()))
            }
            sqlx::Error::PoolClosed => {
                LibraryError::unavailable("connection pool is closed", Some("PoolClosed".to_string()))
            }
            sqlx::Error::Io(io_err) => {
                LibraryError::unavailable(format!("database io {:?}", io_err).as_str(), Some("Io".to_string()))
            }
            sqlx::Error::Tls(tls_err) => {
                LibraryError::unavailable(format!("database tls {:?}", tls_err).as_str(), Some("Tls".to_string()))
            }
            sqlx::Error::RowNotFound => {
                LibraryError::runtime("statement returned no rows", Some("RowNotFound".to_string()))
            }
            sqlx::Error::ColumnDecode { index, source } => {
                LibraryError::serialization(format!("failed to decode column {} {:?}", index, source).as_str())
            }
            sqlx::Error::Decode(decode_err) => {
                LibraryError::serialization(format!("failed to decode row {:?}", decode_err).as_str())
            }
            other => {
                LibraryError::database(format!("{:?}", other).as_str(), None)
            }
        }
    }
}

#[cfg(test)]
pub(crate) async fn build_test_pool() -> DbPool {
    let pool = build_db_pool(&Configuration::new("sqlite::memory:")).await.expect("should build pool");
    create_table(&pool, RepositoryStore::Sqlite).await.expect("should create table");
    pool
}

// file backed so every pooled connection sees the same database
#[cfg(test)]
pub(crate) async fn build_test_file_pool(dir: &std::path::Path, max_connections: u32) -> DbPool {
    let url = format!("sqlite://{}?mode=rwc", dir.join("books.db").display());
    let mut config = Configuration::new(url.as_str());
    config.max_connections = max_connections;
    let pool = build_db_pool(&config).await.expect("should build pool");
    create_table(&pool, RepositoryStore::Sqlite).await.expect("should create table");
    pool
}
