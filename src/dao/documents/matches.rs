use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::MatchEntity,
};

const COLLECTION_NAME: &str = "match_history";

/// Data Access Object for the append-mostly match history collection.
#[derive(Clone)]
pub struct MatchRepository {
    mongo: MongoManager,
}

impl MatchRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<MatchEntity> {
        self.mongo
            .database()
            .await
            .collection::<MatchEntity>(COLLECTION_NAME)
    }

    /// Record a completed match.
    pub async fn insert(&self, record: &MatchEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(record)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a match by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<MatchEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// List a player's matches, most recent first.
    pub async fn list_for_player(
        &self,
        player_id: &str,
        limit: i64,
    ) -> MongoResult<Vec<MatchEntity>> {
        self.collection()
            .await
            .find(doc! {"players.player_id": player_id})
            .sort(doc! {"timestamp": -1})
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

    /// List a game's matches, most recent first.
    pub async fn list_for_game(&self, game_id: &str, limit: i64) -> MongoResult<Vec<MatchEntity>> {
        self.collection()
            .await
            .find(doc! {"game_id": game_id})
            .sort(doc! {"timestamp": -1})
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

    /// Delete a match record, reporting whether one was removed.
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
