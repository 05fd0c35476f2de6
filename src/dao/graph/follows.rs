use neo4rs::query;

use super::{
    error::GraphResult,
    fetch_all, fetch_one, fetch_touched,
    manager::GraphManager,
    models::{FollowRecord, FollowTargetRecord},
};

/// Data Access Object for one-way `FOLLOWS` relationships.
#[derive(Clone)]
pub struct FollowRepository {
    graph: GraphManager,
}

impl FollowRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Create a follow edge between two players.
    pub async fn follow(
        &self,
        follower_id: &str,
        following_id: &str,
        since: &str,
    ) -> GraphResult<Option<FollowTargetRecord>> {
        let cypher = "MATCH (follower:Player {player_id: $follower_id}) \
             MATCH (following:Player {player_id: $following_id}) \
             CREATE (follower)-[:FOLLOWS {since: $since}]->(following) \
             RETURN following.player_id as player_id, following.username as username";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("follower_id", follower_id)
                .param("following_id", following_id)
                .param("since", since),
            "following player",
        )
        .await
    }

    /// List players the given player follows.
    pub async fn following(&self, player_id: &str) -> GraphResult<Vec<FollowRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[f:FOLLOWS]->(following:Player) \
             RETURN following.player_id as player_id, following.username as username, \
                    following.status as status, f.since as following_since";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "listing following",
        )
        .await
    }

    /// List players following the given player.
    pub async fn followers(&self, player_id: &str) -> GraphResult<Vec<FollowRecord>> {
        let cypher = "MATCH (follower:Player)-[f:FOLLOWS]->(p:Player {player_id: $player_id}) \
             RETURN follower.player_id as player_id, follower.username as username, \
                    follower.status as status, f.since as following_since";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "listing followers",
        )
        .await
    }

    /// Remove a follow edge, reporting whether one existed.
    pub async fn unfollow(&self, follower_id: &str, following_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (follower:Player {player_id: $follower_id})-[f:FOLLOWS]->\
                     (following:Player {player_id: $following_id}) \
             DELETE f RETURN count(f) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("follower_id", follower_id)
                .param("following_id", following_id),
            "unfollowing player",
        )
        .await
    }
}
