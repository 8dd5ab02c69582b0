use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author_first_name: String,
    pub author_last_name: String,
    pub genre: Option<String>,
    pub published_year: Option<i64>,
    #[serde(with = "serializer")]
    pub created_at: i64,
    #[serde(with = "serializer")]
    pub updated_at: i64,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author_first_name: other.author_first_name.to_string(),
            author_last_name: other.author_last_name.to_string(),
            genre: other.genre.clone(),
            published_year: other.published_year,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
