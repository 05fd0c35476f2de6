use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, Document, doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::{AchievementEntity, PlayerAchievementEntity},
};

const ACHIEVEMENT_COLLECTION_NAME: &str = "achievements";
const PROGRESS_COLLECTION_NAME: &str = "player_achievements";

/// Data Access Object for achievement definitions.
#[derive(Clone)]
pub struct AchievementRepository {
    mongo: MongoManager,
}

impl AchievementRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<AchievementEntity> {
        self.mongo
            .database()
            .await
            .collection::<AchievementEntity>(ACHIEVEMENT_COLLECTION_NAME)
    }

    /// Insert a new achievement definition.
    pub async fn insert(&self, achievement: &AchievementEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(achievement)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: ACHIEVEMENT_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch an achievement by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<AchievementEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: ACHIEVEMENT_COLLECTION_NAME,
                source,
            })
    }

    /// List every achievement defined for a game.
    pub async fn list_for_game(&self, game_id: &str) -> MongoResult<Vec<AchievementEntity>> {
        self.collection()
            .await
            .find(doc! {"game_id": game_id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: ACHIEVEMENT_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: ACHIEVEMENT_COLLECTION_NAME,
                source,
            })
    }

    /// Apply a partial `$set` update to an achievement definition.
    pub async fn update_fields(&self, id: ObjectId, fields: Document) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(doc! {"_id": id}, doc! {"$set": fields})
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: ACHIEVEMENT_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Delete an achievement definition, reporting whether one was removed.
    pub async fn delete(&self, id: ObjectId) -> MongoResult<bool> {
        let result = self
            .collection()
            .await
            .delete_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: ACHIEVEMENT_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }
}

/// Data Access Object for per-player achievement progress.
///
/// Progress documents are addressed by the `(player_id, achievement_id)` pair,
/// backed by a unique compound index.
#[derive(Clone)]
pub struct PlayerAchievementRepository {
    mongo: MongoManager,
}

impl PlayerAchievementRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<PlayerAchievementEntity> {
        self.mongo
            .database()
            .await
            .collection::<PlayerAchievementEntity>(PROGRESS_COLLECTION_NAME)
    }

    fn pair_filter(player_id: &str, achievement_id: &str) -> Document {
        doc! {"player_id": player_id, "achievement_id": achievement_id}
    }

    /// Start tracking an achievement for a player.
    pub async fn insert(&self, progress: &PlayerAchievementEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(progress)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a player's progress on one achievement.
    pub async fn find(
        &self,
        player_id: &str,
        achievement_id: &str,
    ) -> MongoResult<Option<PlayerAchievementEntity>> {
        self.collection()
            .await
            .find_one(Self::pair_filter(player_id, achievement_id))
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })
    }

    /// List a player's tracked achievements, optionally completed ones only.
    pub async fn list_for_player(
        &self,
        player_id: &str,
        completed_only: bool,
    ) -> MongoResult<Vec<PlayerAchievementEntity>> {
        let mut filter = doc! {"player_id": player_id};
        if completed_only {
            filter.insert("completed", true);
        }
        self.collection()
            .await
            .find(filter)
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })
    }

    /// Overwrite the free-form progress block.
    pub async fn set_progress(
        &self,
        player_id: &str,
        achievement_id: &str,
        progress: Document,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, achievement_id),
                doc! {"$set": {"progress": progress}},
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Mark the achievement completed with an unlock timestamp.
    pub async fn complete(
        &self,
        player_id: &str,
        achievement_id: &str,
        unlocked_at: DateTime,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, achievement_id),
                doc! {"$set": {"completed": true, "unlocked_at": unlocked_at}},
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Delete a progress document, reporting whether one was removed.
    pub async fn delete(&self, player_id: &str, achievement_id: &str) -> MongoResult<bool> {
        let result = self
            .collection()
            .await
            .delete_one(Self::pair_filter(player_id, achievement_id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: PROGRESS_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }
}
