use async_trait::async_trait;
use derive_new::new;
use kernel::model::book::event::{CreateBook, DeleteBook, PurchaseBook, UpdateBook};
use kernel::model::book::Book;
use kernel::model::id::BookId;
use kernel::repository::book::BookRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::book::BookRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(&self, event: CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (book_id, title, author, genre, price, available)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING book_id, title, author, genre, price, available
            "#,
        )
        .bind(BookId::new())
        .bind(&event.title)
        .bind(&event.author)
        .bind(&event.genre)
        .bind(event.price)
        .bind(event.available)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::StorageError)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT book_id, title, author, genre, price, available FROM books",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::StorageError)?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT book_id, title, author, genre, price, available FROM books WHERE book_id = $1",
        )
        .bind(book_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::StorageError)?;

        Ok(row.map(Book::from))
    }

    async fn find_by_genre(&self, genre: String) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT book_id, title, author, genre, price, available FROM books WHERE genre = $1",
        )
        .bind(genre)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::StorageError)?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn update(&self, event: UpdateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books
            SET title = $2, author = $3, genre = $4, price = $5, available = $6
            WHERE book_id = $1
            RETURNING book_id, title, author, genre, price, available
            "#,
        )
        .bind(event.book_id)
        .bind(&event.title)
        .bind(&event.author)
        .bind(&event.genre)
        .bind(event.price)
        .bind(event.available)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::StorageError)?;

        row.map(Book::from)
            .ok_or_else(|| AppError::EntityNotFound(format!("book {} not found", event.book_id)))
    }

    async fn delete(&self, event: DeleteBook) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(event.book_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::StorageError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "book {} not found",
                event.book_id
            )));
        }
        Ok(())
    }

    async fn purchase_with_discount(&self, event: PurchaseBook) -> AppResult<Book> {
        // The availability gate and the price write are one statement, so two
        // purchases of the same id can never both succeed.
        let updated = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books
            SET price = price - price * ($2 / 100.0), available = FALSE
            WHERE book_id = $1 AND available = TRUE
            RETURNING book_id, title, author, genre, price, available
            "#,
        )
        .bind(event.book_id)
        .bind(event.discount)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::StorageError)?;

        match updated {
            Some(row) => Ok(row.into()),
            // No row passed the condition: the id is unknown or the book has
            // already been sold.
            None => match self.find_by_id(event.book_id).await? {
                Some(_) => Err(AppError::EntityNotAvailable(format!(
                    "book {} is not available",
                    event.book_id
                ))),
                None => Err(AppError::EntityNotFound(format!(
                    "book {} not found",
                    event.book_id
                ))),
            },
        }
    }

    async fn count_available(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE available = TRUE")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::StorageError)
    }
}
