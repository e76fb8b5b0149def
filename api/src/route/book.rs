use axum::routing::{delete, get, post, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::book::{
    delete_book, purchase_book, register_book, show_available_book_count, show_book_list,
    show_book_list_by_genre, update_book,
};

pub fn build_book_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/add", post(register_book))
        .route("/", get(show_book_list))
        .route("/delete/:book_id", delete(delete_book))
        .route("/edit/:book_id", put(update_book))
        .route("/filterByGenre/:genre", get(show_book_list_by_genre))
        .route("/buyWithDiscount/:book_id", post(purchase_book))
        .route("/availableCount", get(show_available_book_count))
}
