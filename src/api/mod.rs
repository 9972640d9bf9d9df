//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root — the published contract fixes
//! the exact paths (`/items/`, `/items/{id}`, `/`, `/health`).

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Items CRUD API",
        description = "API pour gérer une liste d'articles",
        version = "1.0.0",
    ),
    paths(
        handlers::system::root_handler,
        handlers::system::health_handler,
        handlers::item::create_item,
        handlers::item::list_items,
        handlers::item::get_item,
        handlers::item::update_item,
        handlers::item::delete_item,
    ),
    components(schemas(
        dto::ItemPayload,
        dto::ItemDto,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    ))
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}
