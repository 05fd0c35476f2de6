use neo4rs::query;

use super::{
    error::GraphResult,
    fetch_all, fetch_one, fetch_touched,
    manager::GraphManager,
    models::BlockRecord,
};

/// Data Access Object for `BLOCKED` relationships.
#[derive(Clone)]
pub struct BlockRepository {
    graph: GraphManager,
}

impl BlockRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Block a player, tearing down any friendship between the pair.
    pub async fn block(
        &self,
        blocker_id: &str,
        blocked_id: &str,
        reason: Option<&str>,
        since: &str,
    ) -> GraphResult<Option<BlockRecord>> {
        let cypher = "MATCH (blocker:Player {player_id: $blocker_id}) \
             MATCH (blocked:Player {player_id: $blocked_id}) \
             OPTIONAL MATCH (blocker)-[f:FRIENDS_WITH]-(blocked) \
             DELETE f \
             CREATE (blocker)-[b:BLOCKED {since: $since, reason: $reason}]->(blocked) \
             RETURN blocked.player_id as blocked_player_id, \
                    blocked.username as blocked_username, \
                    b.since as blocked_since, b.reason as reason";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("blocker_id", blocker_id)
                .param("blocked_id", blocked_id)
                .param("reason", reason.map(str::to_owned))
                .param("since", since),
            "blocking player",
        )
        .await
    }

    /// List players blocked by the given player.
    pub async fn list(&self, player_id: &str) -> GraphResult<Vec<BlockRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[b:BLOCKED]->(blocked:Player) \
             RETURN blocked.player_id as blocked_player_id, \
                    blocked.username as blocked_username, \
                    b.since as blocked_since, b.reason as reason";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "listing blocked players",
        )
        .await
    }

    /// Remove a block, reporting whether one existed.
    pub async fn unblock(&self, blocker_id: &str, blocked_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (blocker:Player {player_id: $blocker_id})-[b:BLOCKED]->\
                     (blocked:Player {player_id: $blocked_id}) \
             DELETE b RETURN count(b) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("blocker_id", blocker_id)
                .param("blocked_id", blocked_id),
            "unblocking player",
        )
        .await
    }
}
