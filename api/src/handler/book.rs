use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::book::event::DeleteBook;
use kernel::model::id::BookId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::book::{
    AvailableCountResponse, BookResponse, CreateBookRequest, PurchaseBookRequest,
    PurchaseBookRequestWithId, UpdateBookRequest, UpdateBookRequestWithId,
};

#[utoipa::path(
    post,
    path = "/add",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book added", body = BookResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn register_book(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    req.validate(&())?;
    registry
        .book_repository()
        .create(req.into())
        .await
        .map(|book| (StatusCode::CREATED, Json(book.into())))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All books", body = [BookResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn show_book_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookResponse>>> {
    registry
        .book_repository()
        .find_all()
        .await
        .map(|v| v.into_iter().map(BookResponse::from).collect::<Vec<_>>())
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/delete/{book_id}",
    params(("book_id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Unknown book id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_book(
    Path(book_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let book_id = book_id.parse::<BookId>()?;
    registry
        .book_repository()
        .delete(DeleteBook { book_id })
        .await
        .map(|_| StatusCode::OK)
}

#[utoipa::path(
    put,
    path = "/edit/{book_id}",
    params(("book_id" = String, Path, description = "Book identifier")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse),
        (status = 404, description = "Unknown book id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_book(
    Path(book_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    let book_id = book_id.parse::<BookId>()?;
    req.validate(&())?;
    registry
        .book_repository()
        .update(UpdateBookRequestWithId::new(book_id, req).into())
        .await
        .map(BookResponse::from)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/filterByGenre/{genre}",
    params(("genre" = String, Path, description = "Exact genre to match")),
    responses(
        (status = 200, description = "Books in the genre", body = [BookResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn show_book_list_by_genre(
    Path(genre): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookResponse>>> {
    registry
        .book_repository()
        .find_by_genre(genre)
        .await
        .map(|v| v.into_iter().map(BookResponse::from).collect::<Vec<_>>())
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/buyWithDiscount/{book_id}",
    params(("book_id" = String, Path, description = "Book identifier")),
    request_body = PurchaseBookRequest,
    responses(
        (status = 200, description = "Book purchased", body = BookResponse),
        (status = 400, description = "Discount out of range or book not available", body = ErrorResponse),
        (status = 404, description = "Unknown book id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn purchase_book(
    Path(book_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<PurchaseBookRequest>,
) -> AppResult<Json<BookResponse>> {
    let book_id = book_id.parse::<BookId>()?;
    req.validate(&())?;
    registry
        .book_repository()
        .purchase_with_discount(PurchaseBookRequestWithId::new(book_id, req).into())
        .await
        .map(BookResponse::from)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/availableCount",
    responses(
        (status = 200, description = "Number of purchasable books", body = AvailableCountResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn show_available_book_count(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailableCountResponse>> {
    registry
        .book_repository()
        .count_available()
        .await
        .map(|count| Json(AvailableCountResponse { count }))
}
