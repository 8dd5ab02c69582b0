pub mod model;

// Book gives read access to the fields that identify a book for its readers,
// the same title and author pair is never stored twice.
pub trait Book {
    fn title(&self) -> &str;
    fn author_first_name(&self) -> &str;
    fn author_last_name(&self) -> &str;

    fn author_name(&self) -> String {
        format!("{} {}", self.author_first_name(), self.author_last_name())
    }
}
