use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::NotificationEntity,
};

const COLLECTION_NAME: &str = "notifications";

/// Data Access Object for player notification documents.
#[derive(Clone)]
pub struct NotificationRepository {
    mongo: MongoManager,
}

impl NotificationRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<NotificationEntity> {
        self.mongo
            .database()
            .await
            .collection::<NotificationEntity>(COLLECTION_NAME)
    }

    /// Insert a new notification.
    pub async fn insert(&self, notification: &NotificationEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(notification)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a notification by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<NotificationEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// List a player's notifications, newest first, optionally unread only.
    pub async fn list_for_player(
        &self,
        player_id: &str,
        unread_only: bool,
        limit: i64,
    ) -> MongoResult<Vec<NotificationEntity>> {
        let mut filter = doc! {"player_id": player_id};
        if unread_only {
            filter.insert("read", false);
        }
        self.collection()
            .await
            .find(filter)
            .sort(doc! {"created_at": -1})
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

    /// Mark one notification read.
    pub async fn mark_read(&self, id: ObjectId) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(doc! {"_id": id}, doc! {"$set": {"read": true}})
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Mark all of a player's unread notifications read, returning the count.
    pub async fn mark_all_read(&self, player_id: &str) -> MongoResult<u64> {
        let result = self
            .collection()
            .await
            .update_many(
                doc! {"player_id": player_id, "read": false},
                doc! {"$set": {"read": true}},
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(result.modified_count)
    }

    /// Delete a notification, reporting whether one was removed.
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

    /// Purge a player's read notifications created before the cutoff.
    pub async fn delete_read_before(&self, player_id: &str, cutoff: DateTime) -> MongoResult<u64> {
        let result = self
            .collection()
            .await
            .delete_many(doc! {
                "player_id": player_id,
                "created_at": {"$lt": cutoff},
                "read": true,
            })
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count)
    }
}
