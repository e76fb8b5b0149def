use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::book::event::{CreateBook, DeleteBook, PurchaseBook, UpdateBook};
use crate::model::book::Book;
use crate::model::id::BookId;

#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persists a new book and returns the stored record with its assigned
    /// id.
    async fn create(&self, event: CreateBook) -> AppResult<Book>;

    /// Every stored book. Order is not part of the contract.
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>>;

    /// Books whose genre equals `genre`; an empty vec when none match.
    async fn find_by_genre(&self, genre: String) -> AppResult<Vec<Book>>;

    /// Replaces all mutable fields of one record. `EntityNotFound` when the
    /// id is unknown.
    async fn update(&self, event: UpdateBook) -> AppResult<Book>;

    /// Removes one record. `EntityNotFound` when the id is unknown.
    async fn delete(&self, event: DeleteBook) -> AppResult<()>;

    /// Applies the discount and flips `available` to false in one
    /// conditional write. `EntityNotFound` when the id is unknown,
    /// `EntityNotAvailable` when the book is already sold, including when a
    /// concurrent purchase of the same id won the write.
    async fn purchase_with_discount(&self, event: PurchaseBook) -> AppResult<Book>;

    /// Number of books with `available == true`.
    async fn count_available(&self) -> AppResult<i64>;
}
