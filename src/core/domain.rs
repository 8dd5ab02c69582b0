use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_API_PREFIX: &str = "/api";

// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub api_prefix: String,
    pub dev_mode: bool,
}

impl Configuration {
    pub fn new(database_url: &str) -> Self {
        Configuration {
            database_url: database_url.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            dev_mode: false,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    // from_vars builds the configuration from any key lookup, missing keys fall back to defaults
    pub fn from_vars<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("DATABASE_URL").as_deref().unwrap_or(DEFAULT_DATABASE_URL));
        if let Some(val) = lookup("BOOKS_MAX_CONNECTIONS") {
            config.max_connections = parse_var("BOOKS_MAX_CONNECTIONS", &val)?;
        }
        if let Some(val) = lookup("BOOKS_ACQUIRE_TIMEOUT_SECS") {
            config.acquire_timeout_secs = parse_var("BOOKS_ACQUIRE_TIMEOUT_SECS", &val)?;
        }
        if let Some(val) = lookup("BOOKS_API_PREFIX") {
            config.api_prefix = parse_prefix(&val)?;
        }
        if let Some(val) = lookup("BOOKS_DEV_MODE") {
            config.dev_mode = parse_var("BOOKS_DEV_MODE", &val)?;
        }
        Ok(config)
    }

    // each connection to an in-memory SQLite database sees its own database
    pub fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("sqlite::memory:") || self.database_url.contains("mode=memory")
    }

    pub fn pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

// the prefix always starts with `/` and never ends with one, an empty prefix mounts at the root
fn parse_prefix(val: &str) -> LibraryResult<String> {
    let trimmed = val.trim().trim_matches('/');
    if trimmed.contains(|c: char| c == ':' || c == '*' || c == '{' || c == '}' || c.is_whitespace()) {
        return Err(LibraryError::validation(
            format!("invalid value {:?} for BOOKS_API_PREFIX", val).as_str(),
            Some("BOOKS_API_PREFIX".to_string())));
    }
    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("/{}", trimmed))
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, val: &str) -> LibraryResult<T> {
    val.trim().parse::<T>().map_err(|_| {
        LibraryError::validation(format!("invalid value {:?} for {}", val, key).as_str(),
                                 Some(key.to_string()))
    })
}
