use neo4rs::query;

use super::{
    error::{GraphDaoError, GraphResult},
    fetch_all, fetch_one, fetch_touched,
    manager::GraphManager,
    models::{
        ClanCreatedRecord, ClanJoinRecord, ClanMembershipRecord, ClanRecord, ClanRoleRecord,
        ClanSummaryRecord,
    },
};

/// Data Access Object for clans and their membership edges.
#[derive(Clone)]
pub struct ClanRepository {
    graph: GraphManager,
}

impl ClanRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Create a clan with its owner as the first member.
    pub async fn create(
        &self,
        clan_id: &str,
        name: &str,
        tag: &str,
        owner_id: &str,
        description: Option<&str>,
        created_at: &str,
    ) -> GraphResult<Option<ClanCreatedRecord>> {
        let cypher = "MATCH (owner:Player {player_id: $owner_id}) \
             CREATE (clan:Clan {clan_id: $clan_id, name: $name, tag: $tag, \
                     description: $description, created_at: $created_at}) \
             CREATE (owner)-[:BELONGS_TO {joined_at: $created_at, role: 'owner', rank: 1}]->(clan) \
             RETURN clan.clan_id as clan_id, clan.name as name, clan.tag as tag, \
                    clan.description as description, clan.created_at as created_at";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("clan_id", clan_id)
                .param("name", name)
                .param("tag", tag)
                .param("owner_id", owner_id)
                .param("description", description.map(str::to_owned))
                .param("created_at", created_at),
            "creating clan",
        )
        .await
    }

    /// Count a clan's current members.
    pub async fn member_count(&self, clan_id: &str) -> GraphResult<i64> {
        let cypher = "MATCH (clan:Clan {clan_id: $clan_id}) \
             OPTIONAL MATCH (m:Player)-[:BELONGS_TO]->(clan) \
             RETURN count(m) as n";
        let context = "counting clan members";
        let mut stream = self
            .graph
            .graph()
            .await
            .execute(query(cypher).param("clan_id", clan_id))
            .await
            .map_err(|source| GraphDaoError::Query { context, source })?;

        match stream
            .next()
            .await
            .map_err(|source| GraphDaoError::Query { context, source })?
        {
            Some(row) => row
                .get("n")
                .map_err(|source| GraphDaoError::Decode { context, source }),
            None => Ok(0),
        }
    }

    /// Add a member at the given rank.
    pub async fn join(
        &self,
        clan_id: &str,
        player_id: &str,
        rank: i64,
        joined_at: &str,
    ) -> GraphResult<Option<ClanJoinRecord>> {
        let cypher = "MATCH (player:Player {player_id: $player_id}) \
             MATCH (clan:Clan {clan_id: $clan_id}) \
             CREATE (player)-[:BELONGS_TO {joined_at: $joined_at, role: 'member', \
                     rank: $rank}]->(clan) \
             RETURN clan.clan_id as clan_id, player.player_id as player_id, \
                    player.username as username";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("clan_id", clan_id)
                .param("player_id", player_id)
                .param("rank", rank)
                .param("joined_at", joined_at),
            "joining clan",
        )
        .await
    }

    /// Fetch a clan with its member roster.
    pub async fn get(&self, clan_id: &str) -> GraphResult<Option<ClanRecord>> {
        let cypher = "MATCH (clan:Clan {clan_id: $clan_id}) \
             RETURN clan.clan_id as clan_id, clan.name as name, clan.tag as tag, \
                    clan.description as description, clan.created_at as created_at, \
                    size([(m:Player)-[:BELONGS_TO]->(clan) | m]) as member_count, \
                    [(member:Player)-[bt:BELONGS_TO]->(clan) | \
                     {player_id: member.player_id, username: member.username, \
                      role: bt.role, rank: bt.rank, joined_at: bt.joined_at}] as members";
        fetch_one(
            &self.graph.graph().await,
            query(cypher).param("clan_id", clan_id),
            "fetching clan",
        )
        .await
    }

    /// Resolve the clan a player belongs to, if any.
    pub async fn clan_of(&self, player_id: &str) -> GraphResult<Option<ClanMembershipRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[bt:BELONGS_TO]->(clan:Clan) \
             RETURN clan.clan_id as clan_id, clan.name as name, clan.tag as tag, \
                    bt.role as role, bt.rank as rank";
        fetch_one(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "fetching player clan",
        )
        .await
    }

    /// Search clans by a name or tag fragment.
    pub async fn search(&self, term: &str, limit: i64) -> GraphResult<Vec<ClanSummaryRecord>> {
        let cypher = "MATCH (clan:Clan) \
             WHERE clan.name CONTAINS $search OR clan.tag CONTAINS $search \
             RETURN clan.clan_id as clan_id, clan.name as name, clan.tag as tag, \
                    clan.description as description, \
                    size([(m:Player)-[:BELONGS_TO]->(clan) | m]) as member_count \
             LIMIT $limit";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("search", term).param("limit", limit),
            "searching clans",
        )
        .await
    }

    /// Apply a partial update to the clan profile, reporting whether the clan
    /// exists.
    pub async fn update(
        &self,
        clan_id: &str,
        name: Option<&str>,
        tag: Option<&str>,
        description: Option<&str>,
    ) -> GraphResult<bool> {
        let mut clauses = Vec::new();
        if name.is_some() {
            clauses.push("clan.name = $name");
        }
        if tag.is_some() {
            clauses.push("clan.tag = $tag");
        }
        if description.is_some() {
            clauses.push("clan.description = $description");
        }
        if clauses.is_empty() {
            return Ok(self.get(clan_id).await?.is_some());
        }

        let cypher = format!(
            "MATCH (clan:Clan {{clan_id: $clan_id}}) SET {} RETURN count(clan) as n",
            clauses.join(", ")
        );
        let mut q = query(&cypher).param("clan_id", clan_id);
        if let Some(name) = name {
            q = q.param("name", name);
        }
        if let Some(tag) = tag {
            q = q.param("tag", tag);
        }
        if let Some(description) = description {
            q = q.param("description", description);
        }
        fetch_touched(&self.graph.graph().await, q, "updating clan").await
    }

    /// Change a member's role, and optionally their rank.
    pub async fn update_member_role(
        &self,
        clan_id: &str,
        player_id: &str,
        role: &str,
        rank: Option<i64>,
    ) -> GraphResult<Option<ClanRoleRecord>> {
        let mut clauses = vec!["bt.role = $role"];
        if rank.is_some() {
            clauses.push("bt.rank = $rank");
        }

        let cypher = format!(
            "MATCH (p:Player {{player_id: $player_id}})-[bt:BELONGS_TO]->\
             (clan:Clan {{clan_id: $clan_id}}) \
             SET {} \
             RETURN p.player_id as player_id, p.username as username, \
                    bt.role as role, bt.rank as rank",
            clauses.join(", ")
        );
        let mut q = query(&cypher)
            .param("clan_id", clan_id)
            .param("player_id", player_id)
            .param("role", role);
        if let Some(rank) = rank {
            q = q.param("rank", rank);
        }
        fetch_one(&self.graph.graph().await, q, "updating clan member role").await
    }

    /// Remove a member from a clan.
    pub async fn leave(&self, clan_id: &str, player_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[bt:BELONGS_TO]->\
                     (clan:Clan {clan_id: $clan_id}) \
             DELETE bt RETURN count(bt) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("clan_id", clan_id)
                .param("player_id", player_id),
            "leaving clan",
        )
        .await
    }

    /// Delete a clan along with every membership edge.
    pub async fn disband(&self, clan_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (clan:Clan {clan_id: $clan_id}) \
             DETACH DELETE clan RETURN count(clan) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher).param("clan_id", clan_id),
            "disbanding clan",
        )
        .await
    }
}
