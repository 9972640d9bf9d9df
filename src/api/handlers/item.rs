//! Item CRUD handlers: create, list, get, update, delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ItemDto, ItemPayload};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// Unwraps the body extractor, turning a malformed or incomplete body
/// into a 422 validation error before the repository is touched.
fn validated(payload: Result<Json<ItemPayload>, JsonRejection>) -> Result<ItemPayload, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(payload)
}

/// `POST /items/` — Create a new item.
///
/// # Errors
///
/// Returns an [`ApiError`] on an invalid body or store failure.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "Items",
    summary = "Create an item",
    description = "Persists a new item. The id is assigned by the store; any client-supplied id is ignored.",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 422, description = "Missing or malformed field", body = ErrorResponse),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = validated(payload)?;
    let item = state.item_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ItemDto::from(item))))
}

/// `GET /items/` — List all items.
///
/// # Errors
///
/// Returns an [`ApiError`] on store failure.
#[utoipa::path(
    get,
    path = "/items/",
    tag = "Items",
    summary = "List items",
    description = "Returns every stored item, ordered by id ascending.",
    responses(
        (status = 200, description = "All items", body = Vec<ItemDto>),
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state.item_service.list().await?;
    let dtos: Vec<ItemDto> = items.into_iter().map(ItemDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /items/{id}` — Get a single item.
///
/// # Errors
///
/// Returns [`ApiError::ItemNotFound`] if the id does not exist.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    summary = "Get an item",
    description = "Returns the item with the given id.",
    params(
        ("id" = i64, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorResponse),
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.item_service.get(id).await?;
    Ok(Json(ItemDto::from(item)))
}

/// `PUT /items/{id}` — Replace an item's fields.
///
/// # Errors
///
/// Returns [`ApiError::ItemNotFound`] if the id does not exist, or a
/// validation error on a malformed body.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    summary = "Update an item",
    description = "Overwrites both fields of the item. Partial updates are not supported; both fields are required.",
    params(
        ("id" = i64, Path, description = "Item id"),
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Missing or malformed field", body = ErrorResponse),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = validated(payload)?;
    let item = state.item_service.update(id, payload.into()).await?;
    Ok(Json(ItemDto::from(item)))
}

/// `DELETE /items/{id}` — Delete an item.
///
/// # Errors
///
/// Returns [`ApiError::ItemNotFound`] if the id does not exist.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    summary = "Delete an item",
    description = "Removes the item permanently. Subsequent reads of the same id return 404.",
    params(
        ("id" = i64, Path, description = "Item id"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.item_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Item routes. The collection lives at `/items/` (trailing slash) to
/// match the published contract.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
