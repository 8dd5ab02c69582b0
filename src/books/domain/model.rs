use serde::Deserialize;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDetails holds every field a caller supplies for a book. It is used for
// creation and for full replacement, so a field left out here is written as
// empty rather than merged with the stored value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author_first_name: String,
    pub author_last_name: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub published_year: Option<i64>,
}

impl BookDetails {
    pub fn new(title: &str, author_first_name: &str, author_last_name: &str) -> Self {
        Self {
            title: title.to_string(),
            author_first_name: author_first_name.to_string(),
            author_last_name: author_last_name.to_string(),
            genre: None,
            published_year: None,
        }
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn with_published_year(mut self, year: i64) -> Self {
        self.published_year = Some(year);
        self
    }
}

impl Book for BookDetails {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author_first_name(&self) -> &str {
        self.author_first_name.as_str()
    }

    fn author_last_name(&self) -> &str {
        self.author_last_name.as_str()
    }
}

// BookEntity is a row of the books table, book_id is assigned by the database.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author_first_name: String,
    pub author_last_name: String,
    pub genre: Option<String>,
    pub published_year: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author_first_name(&self) -> &str {
        self.author_first_name.as_str()
    }

    fn author_last_name(&self) -> &str {
        self.author_last_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookDetails, BookEntity};
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_book_details() {
        let book = BookDetails::new("Dune", "Frank", "Herbert")
            .with_genre("science fiction")
            .with_published_year(1965);
        assert_eq!("Dune", book.title());
        assert_eq!("Frank Herbert", book.author_name());
        assert_eq!(Some("science fiction".to_string()), book.genre);
        assert_eq!(Some(1965), book.published_year);
    }

    #[tokio::test]
    async fn test_should_default_optional_details() {
        let book: BookDetails = serde_json::from_str(
            r#"{"title":"Emma","author_first_name":"Jane","author_last_name":"Austen"}"#)
            .expect("should parse details");
        assert_eq!(None, book.genre);
        assert_eq!(None, book.published_year);
    }

    #[tokio::test]
    async fn test_should_identify_entity() {
        let entity = BookEntity {
            book_id: 7,
            title: "Emma".to_string(),
            author_first_name: "Jane".to_string(),
            author_last_name: "Austen".to_string(),
            genre: Some("novel".to_string()),
            published_year: Some(1815),
            created_at: 1,
            updated_at: 2,
        };
        assert_eq!(7, entity.id());
        assert_eq!("Emma", entity.title());
        assert_eq!("Jane Austen", entity.author_name());
    }
}
