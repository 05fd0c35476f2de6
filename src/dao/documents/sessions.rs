use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, DateTime, doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::SessionEntity,
};

const COLLECTION_NAME: &str = "game_sessions";

/// Data Access Object for play session documents.
#[derive(Clone)]
pub struct SessionRepository {
    mongo: MongoManager,
}

impl SessionRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<SessionEntity> {
        self.mongo
            .database()
            .await
            .collection::<SessionEntity>(COLLECTION_NAME)
    }

    /// Open a new session.
    pub async fn insert(&self, session: &SessionEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(session)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a session by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<SessionEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// List a player's sessions that have not ended yet.
    pub async fn list_active(&self, player_id: &str) -> MongoResult<Vec<SessionEntity>> {
        self.collection()
            .await
            .find(doc! {"player_id": player_id, "end_time": Bson::Null})
            .limit(10)
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

    /// Close a session with its end time and duration in whole minutes.
    pub async fn close(
        &self,
        id: ObjectId,
        end_time: DateTime,
        duration_minutes: i64,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                doc! {"_id": id},
                doc! {"$set": {"end_time": end_time, "duration": duration_minutes}},
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Delete a session document, reporting whether one was removed.
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
