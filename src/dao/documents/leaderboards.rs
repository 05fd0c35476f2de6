use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::LeaderboardEntity,
};

const COLLECTION_NAME: &str = "leaderboards";

/// Data Access Object for leaderboard documents.
///
/// Entry lists are small enough that they are rewritten wholesale through
/// [`LeaderboardRepository::replace`] after re-ranking.
#[derive(Clone)]
pub struct LeaderboardRepository {
    mongo: MongoManager,
}

impl LeaderboardRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<LeaderboardEntity> {
        self.mongo
            .database()
            .await
            .collection::<LeaderboardEntity>(COLLECTION_NAME)
    }

    /// Insert a new leaderboard document.
    pub async fn insert(&self, leaderboard: &LeaderboardEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(leaderboard)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch a leaderboard by document id.
    pub async fn find_by_id(&self, id: ObjectId) -> MongoResult<Option<LeaderboardEntity>> {
        self.collection()
            .await
            .find_one(doc! {"_id": id})
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// Fetch the leaderboard matching a game, metric and timeframe.
    pub async fn find_for_game(
        &self,
        game_id: &str,
        leaderboard_type: &str,
        timeframe: &str,
    ) -> MongoResult<Option<LeaderboardEntity>> {
        self.collection()
            .await
            .find_one(doc! {
                "game_id": game_id,
                "leaderboard_type": leaderboard_type,
                "timeframe": timeframe,
            })
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// Replace a leaderboard document with a re-ranked version.
    pub async fn replace(&self, id: ObjectId, leaderboard: &LeaderboardEntity) -> MongoResult<()> {
        self.collection()
            .await
            .replace_one(doc! {"_id": id}, leaderboard)
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Delete a leaderboard document, reporting whether one was removed.
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
