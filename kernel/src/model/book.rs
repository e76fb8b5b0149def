pub mod event;

use derive_new::new;

use crate::model::id::BookId;

#[derive(Debug, Clone, PartialEq, new)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub available: bool,
}
