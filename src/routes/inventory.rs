use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};

use crate::{
    dto::{
        common::MessageResponse,
        inventory::{AddItemQuery, CurrencyQuery, InventoryResponse},
    },
    error::AppError,
    services::inventory_service,
    state::SharedState,
};

/// Per-game inventory endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route(
            "/inventory/{player_id}/{game_id}",
            get(get_inventory)
                .post(create_inventory)
                .delete(delete_inventory),
        )
        .route("/inventory/{player_id}/{game_id}/item", post(add_item))
        .route(
            "/inventory/{player_id}/{game_id}/item/{item_id}",
            delete(remove_item),
        )
        .route(
            "/inventory/{player_id}/{game_id}/currency",
            patch(adjust_currency),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/{player_id}/{game_id}",
    tag = "inventory",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier")
    ),
    responses(
        (status = 201, description = "Empty inventory created", body = InventoryResponse),
        (status = 409, description = "Inventory already exists", body = MessageResponse)
    )
)]
/// Create an empty inventory for a player and game pair.
pub async fn create_inventory(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<InventoryResponse>), AppError> {
    let inventory = inventory_service::create_inventory(&state, &player_id, &game_id).await?;
    Ok((StatusCode::CREATED, Json(inventory)))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/{player_id}/{game_id}",
    tag = "inventory",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier")
    ),
    responses(
        (status = 200, description = "Inventory", body = InventoryResponse),
        (status = 404, description = "Inventory not found", body = MessageResponse)
    )
)]
/// Fetch a player's inventory for one game.
pub async fn get_inventory(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
) -> Result<Json<InventoryResponse>, AppError> {
    Ok(Json(
        inventory_service::get_inventory(&state, &player_id, &game_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/{player_id}/{game_id}/item",
    tag = "inventory",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier"),
        AddItemQuery
    ),
    responses(
        (status = 200, description = "Inventory with the granted item", body = InventoryResponse),
        (status = 404, description = "Inventory not found", body = MessageResponse)
    )
)]
/// Grant an item stack to a player.
pub async fn add_item(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
    Query(query): Query<AddItemQuery>,
) -> Result<Json<InventoryResponse>, AppError> {
    Ok(Json(
        inventory_service::add_item(
            &state,
            &player_id,
            &game_id,
            &query.item_id,
            &query.item_name,
            &query.item_type,
            query.quantity,
        )
        .await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/inventory/{player_id}/{game_id}/currency",
    tag = "inventory",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier"),
        CurrencyQuery
    ),
    responses(
        (status = 200, description = "Inventory with the adjusted balance", body = InventoryResponse),
        (status = 404, description = "Inventory not found", body = MessageResponse)
    )
)]
/// Apply a currency delta; negative amounts spend.
pub async fn adjust_currency(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
    Query(query): Query<CurrencyQuery>,
) -> Result<Json<InventoryResponse>, AppError> {
    Ok(Json(
        inventory_service::adjust_currency(&state, &player_id, &game_id, query.amount).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/inventory/{player_id}/{game_id}/item/{item_id}",
    tag = "inventory",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier"),
        ("item_id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Inventory without the item", body = InventoryResponse),
        (status = 404, description = "Inventory not found", body = MessageResponse)
    )
)]
/// Remove every stack of one item from a player's inventory.
pub async fn remove_item(
    State(state): State<SharedState>,
    Path((player_id, game_id, item_id)): Path<(String, String, String)>,
) -> Result<Json<InventoryResponse>, AppError> {
    Ok(Json(
        inventory_service::remove_item(&state, &player_id, &game_id, &item_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/inventory/{player_id}/{game_id}",
    tag = "inventory",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier")
    ),
    responses(
        (status = 200, description = "Inventory deleted", body = MessageResponse),
        (status = 404, description = "Inventory not found", body = MessageResponse)
    )
)]
/// Delete a player's inventory for one game.
pub async fn delete_inventory(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        inventory_service::delete_inventory(&state, &player_id, &game_id).await?,
    ))
}
