use crate::model::id::BookId;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub available: bool,
}

/// Full replacement of every mutable field of one book.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBook {
    pub book_id: BookId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseBook {
    pub book_id: BookId,
    pub discount: f64,
}
