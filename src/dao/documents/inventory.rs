use mongodb::{
    Collection,
    bson::{DateTime, Document, doc},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::{InventoryEntity, InventoryItemEntity},
};

const COLLECTION_NAME: &str = "player_inventory";

/// Data Access Object for per-player per-game inventory documents.
///
/// Item and currency mutations use atomic `$push`/`$pull`/`$inc` operators so
/// concurrent grants never clobber each other.
#[derive(Clone)]
pub struct InventoryRepository {
    mongo: MongoManager,
}

impl InventoryRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<InventoryEntity> {
        self.mongo
            .database()
            .await
            .collection::<InventoryEntity>(COLLECTION_NAME)
    }

    fn pair_filter(player_id: &str, game_id: &str) -> Document {
        doc! {"player_id": player_id, "game_id": game_id}
    }

    /// Create an empty inventory for a player in a game.
    pub async fn insert(&self, inventory: &InventoryEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(inventory)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a player's inventory for a game.
    pub async fn find(&self, player_id: &str, game_id: &str) -> MongoResult<Option<InventoryEntity>> {
        self.collection()
            .await
            .find_one(Self::pair_filter(player_id, game_id))
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// Append an item to the inventory.
    pub async fn push_item(
        &self,
        player_id: &str,
        game_id: &str,
        item: &InventoryItemEntity,
        at: DateTime,
    ) -> MongoResult<()> {
        let item_doc = doc! {
            "item_id": &item.item_id,
            "item_name": &item.item_name,
            "item_type": &item.item_type,
            "quantity": item.quantity,
            "acquired_at": item.acquired_at,
        };
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, game_id),
                doc! {
                    "$push": {"items": item_doc},
                    "$set": {"last_updated": at},
                },
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Remove every copy of an item from the inventory.
    pub async fn pull_item(
        &self,
        player_id: &str,
        game_id: &str,
        item_id: &str,
        at: DateTime,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, game_id),
                doc! {
                    "$pull": {"items": {"item_id": item_id}},
                    "$set": {"last_updated": at},
                },
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Add to or subtract from the inventory currency balance.
    pub async fn adjust_currency(
        &self,
        player_id: &str,
        game_id: &str,
        amount: i64,
        at: DateTime,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, game_id),
                doc! {
                    "$inc": {"currency": amount},
                    "$set": {"last_updated": at},
                },
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Delete an inventory document, reporting whether one was removed.
    pub async fn delete(&self, player_id: &str, game_id: &str) -> MongoResult<bool> {
        let result = self
            .collection()
            .await
            .delete_one(Self::pair_filter(player_id, game_id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }
}
