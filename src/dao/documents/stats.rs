use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, Document, doc},
};

use super::{
    error::{MongoDaoError, MongoResult},
    manager::MongoManager,
    models::PlayerStatsEntity,
};

const COLLECTION_NAME: &str = "player_stats";

/// Data Access Object for per-player per-game statistics.
///
/// Stats documents are addressed by the `(player_id, game_id)` pair, which is
/// backed by a unique compound index.
#[derive(Clone)]
pub struct StatsRepository {
    mongo: MongoManager,
}

impl StatsRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Collection<PlayerStatsEntity> {
        self.mongo
            .database()
            .await
            .collection::<PlayerStatsEntity>(COLLECTION_NAME)
    }

    fn pair_filter(player_id: &str, game_id: &str) -> Document {
        doc! {"player_id": player_id, "game_id": game_id}
    }

    /// Insert a fresh stats document.
    pub async fn insert(&self, stats: &PlayerStatsEntity) -> MongoResult<()> {
        self.collection()
            .await
            .insert_one(stats)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Fetch the stats document for a player in a given game.
    pub async fn find(
        &self,
        player_id: &str,
        game_id: &str,
    ) -> MongoResult<Option<PlayerStatsEntity>> {
        self.collection()
            .await
            .find_one(Self::pair_filter(player_id, game_id))
            .await
            .map_err(|source| MongoDaoError::Find {
                collection: COLLECTION_NAME,
                source,
            })
    }

    /// List every game's stats for a player.
    pub async fn list_for_player(&self, player_id: &str) -> MongoResult<Vec<PlayerStatsEntity>> {
        self.collection()
            .await
            .find(doc! {"player_id": player_id})
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

    /// Apply counter increments and stamp the update time.
    pub async fn increment(
        &self,
        player_id: &str,
        game_id: &str,
        increments: Document,
        at: DateTime,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, game_id),
                doc! {
                    "$inc": increments,
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

    /// Store the derived kill/death and win-rate figures.
    pub async fn set_ratios(
        &self,
        player_id: &str,
        game_id: &str,
        kd_ratio: f64,
        win_rate: f64,
    ) -> MongoResult<()> {
        self.collection()
            .await
            .update_one(
                Self::pair_filter(player_id, game_id),
                doc! {"$set": {"kd_ratio": kd_ratio, "win_rate": win_rate}},
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    /// Delete a player's stats for a game, reporting whether one was removed.
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
