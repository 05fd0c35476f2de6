use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::GameEntity,
};

const COLLECTION_NAME: &str = "games";

/// Data Access Object encapsulating MongoDB interaction for the game catalog.
#[derive(Clone)]
pub struct GameRepository {
    mongo: MongoManager,
}

impl GameRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<GameEntity> {
        self.mongo
            .database()
            .await
            .collection::<GameEntity>(COLLECTION_NAME)
    }

    /// Insert a new game document.
    pub async fn insert(&self, game: &GameEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(game)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a game by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<GameEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// List games with offset pagination.
    pub async fn list(&self, skip: u64, limit: i64) -> MongoResult<Vec<GameEntity>> {
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

    /// List games available on a given platform.
    pub async fn list_for_platform(&self, platform: &str) -> MongoResult<Vec<GameEntity>> {
        self.collection()
            .await
            .find(doc! {"platforms": platform})
            .limit(100)
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

    /// Apply a partial `$set` update to a game document.
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

    /// Delete a game document, reporting whether one was removed.
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
