use derive_new::new;
use garde::Validate;
use kernel::model::book::event::{CreateBook, PurchaseBook, UpdateBook};
use kernel::model::book::Book;
use kernel::model::id::BookId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(length(min = 1))]
    pub genre: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(skip)]
    pub available: bool,
}

impl From<CreateBookRequest> for CreateBook {
    fn from(value: CreateBookRequest) -> Self {
        let CreateBookRequest {
            title,
            author,
            genre,
            price,
            available,
        } = value;
        Self {
            title,
            author,
            genre,
            price,
            available,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(length(min = 1))]
    pub genre: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(skip)]
    pub available: bool,
}

#[derive(new)]
pub struct UpdateBookRequestWithId(BookId, UpdateBookRequest);

impl From<UpdateBookRequestWithId> for UpdateBook {
    fn from(value: UpdateBookRequestWithId) -> Self {
        let UpdateBookRequestWithId(book_id, req) = value;
        let UpdateBookRequest {
            title,
            author,
            genre,
            price,
            available,
        } = req;
        Self {
            book_id,
            title,
            author,
            genre,
            price,
            available,
        }
    }
}

/// Body of the discounted purchase. The discount is a percentage; bounding it
/// to [0, 100] keeps the resulting price non-negative.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseBookRequest {
    #[garde(range(min = 0.0, max = 100.0))]
    pub discount: f64,
}

#[derive(new)]
pub struct PurchaseBookRequestWithId(BookId, PurchaseBookRequest);

impl From<PurchaseBookRequestWithId> for PurchaseBook {
    fn from(value: PurchaseBookRequestWithId) -> Self {
        let PurchaseBookRequestWithId(book_id, req) = value;
        Self {
            book_id,
            discount: req.discount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    #[schema(value_type = String)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub available: bool,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        let Book {
            id,
            title,
            author,
            genre,
            price,
            available,
        } = value;
        Self {
            id,
            title,
            author,
            genre,
            price,
            available,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableCountResponse {
    pub count: i64,
}
