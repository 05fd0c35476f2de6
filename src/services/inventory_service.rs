//! Business logic for per-game item inventories and currency balances.

use mongodb::bson::oid::ObjectId;

use crate::{
    dao::documents::{
        inventory::InventoryRepository,
        models::{InventoryEntity, InventoryItemEntity},
    },
    dto::{common::MessageResponse, inventory::InventoryResponse},
    error::ServiceError,
    services::now_bson,
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<InventoryRepository, ServiceError> {
    Ok(InventoryRepository::new(state.require_documents().await?))
}

fn inventory_not_found(player_id: &str, game_id: &str) -> ServiceError {
    ServiceError::NotFound(format!(
        "no inventory for player `{player_id}` in game `{game_id}`"
    ))
}

/// Create an empty inventory for a player and game pair.
pub async fn create_inventory(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
) -> Result<InventoryResponse, ServiceError> {
    let repository = repository(state).await?;

    if repository.find(player_id, game_id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "inventory already exists for player `{player_id}` in game `{game_id}`"
        )));
    }

    let inventory = InventoryEntity {
        id: Some(ObjectId::new()),
        player_id: player_id.to_owned(),
        game_id: game_id.to_owned(),
        items: Vec::new(),
        currency: 0,
        last_updated: now_bson(),
    };
    repository.insert(&inventory).await?;

    Ok(inventory.into())
}

/// Fetch a player's inventory for one game.
pub async fn get_inventory(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
) -> Result<InventoryResponse, ServiceError> {
    let repository = repository(state).await?;
    let inventory = repository
        .find(player_id, game_id)
        .await?
        .ok_or_else(|| inventory_not_found(player_id, game_id))?;
    Ok(inventory.into())
}

/// Grant an item stack to a player.
pub async fn add_item(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
    item_id: &str,
    item_name: &str,
    item_type: &str,
    quantity: i64,
) -> Result<InventoryResponse, ServiceError> {
    if quantity < 1 {
        return Err(ServiceError::InvalidInput(
            "quantity must be at least 1".to_owned(),
        ));
    }

    let repository = repository(state).await?;
    if repository.find(player_id, game_id).await?.is_none() {
        return Err(inventory_not_found(player_id, game_id));
    }

    let item = InventoryItemEntity {
        item_id: item_id.to_owned(),
        item_name: item_name.to_owned(),
        item_type: item_type.to_owned(),
        quantity,
        acquired_at: now_bson(),
    };
    repository
        .push_item(player_id, game_id, &item, now_bson())
        .await?;

    let inventory = repository
        .find(player_id, game_id)
        .await?
        .ok_or_else(|| inventory_not_found(player_id, game_id))?;
    Ok(inventory.into())
}

/// Apply a currency delta; negative amounts spend.
pub async fn adjust_currency(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
    amount: i64,
) -> Result<InventoryResponse, ServiceError> {
    let repository = repository(state).await?;
    if repository.find(player_id, game_id).await?.is_none() {
        return Err(inventory_not_found(player_id, game_id));
    }

    repository
        .adjust_currency(player_id, game_id, amount, now_bson())
        .await?;

    let inventory = repository
        .find(player_id, game_id)
        .await?
        .ok_or_else(|| inventory_not_found(player_id, game_id))?;
    Ok(inventory.into())
}

/// Remove every stack of one item from a player's inventory.
pub async fn remove_item(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
    item_id: &str,
) -> Result<InventoryResponse, ServiceError> {
    let repository = repository(state).await?;
    if repository.find(player_id, game_id).await?.is_none() {
        return Err(inventory_not_found(player_id, game_id));
    }

    repository
        .pull_item(player_id, game_id, item_id, now_bson())
        .await?;

    let inventory = repository
        .find(player_id, game_id)
        .await?
        .ok_or_else(|| inventory_not_found(player_id, game_id))?;
    Ok(inventory.into())
}

/// Delete a player's inventory for one game.
pub async fn delete_inventory(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(player_id, game_id).await? {
        return Err(inventory_not_found(player_id, game_id));
    }
    Ok(MessageResponse::new("Inventory deleted successfully"))
}
