use crate::core::library::{LibraryError, LibraryResult};

// RepositoryStore selects the SQL dialect used by the books table
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    Postgres,
    Sqlite,
}

impl RepositoryStore {
    pub fn from_url(url: &str) -> LibraryResult<RepositoryStore> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(RepositoryStore::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(RepositoryStore::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(LibraryError::validation(
                format!("unsupported database scheme {:?}", scheme).as_str(), None))
        }
    }
}
