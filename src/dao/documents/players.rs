use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, Document, doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::PlayerEntity,
};

const COLLECTION_NAME: &str = "players";

/// Data Access Object encapsulating MongoDB interaction for player profiles.
#[derive(Clone)]
pub struct PlayerRepository {
    mongo: MongoManager,
}

impl PlayerRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<PlayerEntity> {
        self.mongo
            .database()
            .await
            .collection::<PlayerEntity>(COLLECTION_NAME)
    }

    /// Insert a new player document.
    pub async fn insert(&self, player: &PlayerEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(player)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a player by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<PlayerEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// Fetch a player by unique username.
    pub async fn find_by_username(&self, username: &str) -> MongoResult<Option<PlayerEntity>> {
        self.collection()
            .await
            .find_one(doc! {"username": username})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// List players with offset pagination.
    pub async fn list(&self, skip: u64, limit: i64) -> MongoResult<Vec<PlayerEntity>> {
        self.collection()
            .await
            .find(doc! {})
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// Apply a partial `$set` update to a player document.
    pub async fn update_fields(&self, id: ObjectId, fields: Document) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(doc! {"_id": id}, doc! {"$set": fields})
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Stamp the player's last login time.
    pub async fn touch_last_login(&self, id: ObjectId, at: DateTime) -> MongoResult<()> {
        self.update_fields(id, doc! {"last_login": at}).await
    }

    /// Delete a player document, reporting whether one was removed.
    pub async fn delete(&self, id: ObjectId) -> MongoResult<bool> {
        let result = self
            .collection()
            .await
            .delete_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }
}
