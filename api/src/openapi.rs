use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handler::book::register_book,
        crate::handler::book::show_book_list,
        crate::handler::book::delete_book,
        crate::handler::book::update_book,
        crate::handler::book::show_book_list_by_genre,
        crate::handler::book::purchase_book,
        crate::handler::book::show_available_book_count,
        crate::handler::health::health_check,
        crate::handler::health::health_check_db,
    ),
    components(schemas(
        crate::model::book::CreateBookRequest,
        crate::model::book::UpdateBookRequest,
        crate::model::book::PurchaseBookRequest,
        crate::model::book::BookResponse,
        crate::model::book::AvailableCountResponse,
        shared::error::ErrorResponse,
    ))
)]
pub struct ApiDoc;
