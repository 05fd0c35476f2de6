use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    dao::documents::models::{InventoryEntity, InventoryItemEntity},
    dto::{format_datetime, hex_id},
};

/// Parameters for granting an item to a player.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AddItemQuery {
    pub item_id: String,
    pub item_name: String,
    /// Item category, e.g. `weapon`, `skin` or `consumable`.
    pub item_type: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Currency delta; negative amounts spend.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CurrencyQuery {
    pub amount: i64,
}

/// One stack of items in an inventory.
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryItemDto {
    pub item_id: String,
    pub item_name: String,
    pub item_type: String,
    pub quantity: i64,
    pub acquired_at: String,
}

impl From<InventoryItemEntity> for InventoryItemDto {
    fn from(item: InventoryItemEntity) -> Self {
        Self {
            item_id: item.item_id,
            item_name: item.item_name,
            item_type: item.item_type,
            quantity: item.quantity,
            acquired_at: format_datetime(item.acquired_at),
        }
    }
}

/// A player's per-game inventory returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryResponse {
    pub inventory_id: String,
    pub player_id: String,
    pub game_id: String,
    pub items: Vec<InventoryItemDto>,
    pub currency: i64,
    pub last_updated: String,
}

impl From<InventoryEntity> for InventoryResponse {
    fn from(inventory: InventoryEntity) -> Self {
        Self {
            inventory_id: hex_id(inventory.id),
            player_id: inventory.player_id,
            game_id: inventory.game_id,
            items: inventory.items.into_iter().map(Into::into).collect(),
            currency: inventory.currency,
            last_updated: format_datetime(inventory.last_updated),
        }
    }
}
