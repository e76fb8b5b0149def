use axum::extract::State;
use axum::http::StatusCode;
use registry::AppRegistry;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is reachable"))
)]
#[axum::debug_handler]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    get,
    path = "/health/db",
    responses(
        (status = 200, description = "Database is reachable"),
        (status = 500, description = "Database is unreachable")
    )
)]
#[axum::debug_handler]
pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
