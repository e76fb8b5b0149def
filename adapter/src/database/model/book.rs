use kernel::model::book::Book;
use kernel::model::id::BookId;

/// One row of the `books` table.
#[derive(Debug, sqlx::FromRow)]
pub struct BookRow {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub available: bool,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        let BookRow {
            book_id,
            title,
            author,
            genre,
            price,
            available,
        } = value;
        Self {
            id: book_id,
            title,
            author,
            genre,
            price,
            available,
        }
    }
}
