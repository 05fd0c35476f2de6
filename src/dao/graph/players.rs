use neo4rs::query;

use super::{
    error::GraphResult,
    fetch_one, fetch_touched,
    manager::GraphManager,
    models::PlayerNodeRecord,
};

const RETURN_PLAYER: &str =
    "RETURN p.player_id as player_id, p.username as username, p.status as status";

/// Data Access Object for player presence nodes.
#[derive(Clone)]
pub struct PlayerNodeRepository {
    graph: GraphManager,
}

impl PlayerNodeRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Create a presence node mirroring a player profile.
    pub async fn create(
        &self,
        player_id: &str,
        username: &str,
        status: &str,
        created_at: &str,
    ) -> GraphResult<Option<PlayerNodeRecord>> {
        let cypher = format!(
            "CREATE (p:Player {{player_id: $player_id, username: $username, \
             status: $status, created_at: $created_at}}) {RETURN_PLAYER}"
        );
        fetch_one(
            &self.graph.graph().await,
            query(&cypher)
                .param("player_id", player_id)
                .param("username", username)
                .param("status", status)
                .param("created_at", created_at),
            "creating player node",
        )
        .await
    }

    /// Fetch a presence node by player id.
    pub async fn get(&self, player_id: &str) -> GraphResult<Option<PlayerNodeRecord>> {
        let cypher = format!("MATCH (p:Player {{player_id: $player_id}}) {RETURN_PLAYER}");
        fetch_one(
            &self.graph.graph().await,
            query(&cypher).param("player_id", player_id),
            "fetching player node",
        )
        .await
    }

    /// Apply a partial update to the username and/or status properties.
    pub async fn update(
        &self,
        player_id: &str,
        username: Option<&str>,
        status: Option<&str>,
    ) -> GraphResult<Option<PlayerNodeRecord>> {
        let mut clauses = Vec::new();
        if username.is_some() {
            clauses.push("p.username = $username");
        }
        if status.is_some() {
            clauses.push("p.status = $status");
        }
        if clauses.is_empty() {
            return self.get(player_id).await;
        }

        let cypher = format!(
            "MATCH (p:Player {{player_id: $player_id}}) SET {} {RETURN_PLAYER}",
            clauses.join(", ")
        );
        let mut q = query(&cypher).param("player_id", player_id);
        if let Some(username) = username {
            q = q.param("username", username);
        }
        if let Some(status) = status {
            q = q.param("status", status);
        }
        fetch_one(&self.graph.graph().await, q, "updating player node").await
    }

    /// Delete a presence node and every relationship attached to it.
    pub async fn delete(&self, player_id: &str) -> GraphResult<bool> {
        fetch_touched(
            &self.graph.graph().await,
            query("MATCH (p:Player {player_id: $player_id}) DETACH DELETE p RETURN count(p) as n")
                .param("player_id", player_id),
            "deleting player node",
        )
        .await
    }
}
