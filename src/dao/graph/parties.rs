use neo4rs::query;

use super::{
    error::GraphResult,
    fetch_one, fetch_touched,
    manager::GraphManager,
    models::{
        PartyCreatedRecord, PartyInviteRecord, PartyJoinRecord, PartyRecord, PartySummaryRecord,
    },
};

/// Data Access Object for parties and their membership edges.
#[derive(Clone)]
pub struct PartyRepository {
    graph: GraphManager,
}

impl PartyRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Create a party with its leader already inside.
    pub async fn create(
        &self,
        party_id: &str,
        leader_id: &str,
        game_id: &str,
        max_size: i64,
        is_public: bool,
        created_at: &str,
    ) -> GraphResult<Option<PartyCreatedRecord>> {
        let cypher = "MATCH (leader:Player {player_id: $leader_id}) \
             CREATE (party:Party {party_id: $party_id, game_id: $game_id, \
                     max_size: $max_size, is_public: $is_public, created_at: $created_at}) \
             CREATE (leader)-[:IN_PARTY {joined_at: $created_at, role: 'leader'}]->(party) \
             RETURN party.party_id as party_id, party.game_id as game_id, \
                    party.max_size as max_size, party.is_public as is_public, \
                    party.created_at as created_at";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("leader_id", leader_id)
                .param("party_id", party_id)
                .param("game_id", game_id)
                .param("max_size", max_size)
                .param("is_public", is_public)
                .param("created_at", created_at),
            "creating party",
        )
        .await
    }

    /// Record a party invitation towards a player.
    pub async fn invite(
        &self,
        party_id: &str,
        inviter_id: &str,
        invitee_id: &str,
        invited_at: &str,
    ) -> GraphResult<Option<PartyInviteRecord>> {
        let cypher = "MATCH (party:Party {party_id: $party_id}) \
             MATCH (invitee:Player {player_id: $invitee_id}) \
             CREATE (invitee)-[:INVITED_TO {invited_by: $inviter_id, \
                     invited_at: $invited_at}]->(party) \
             RETURN party.party_id as party_id, invitee.player_id as invitee_id, \
                    invitee.username as invitee_username";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("party_id", party_id)
                .param("inviter_id", inviter_id)
                .param("invitee_id", invitee_id)
                .param("invited_at", invited_at),
            "inviting to party",
        )
        .await
    }

    /// Join a party, consuming any pending invitation on the way in.
    pub async fn join(
        &self,
        party_id: &str,
        player_id: &str,
        joined_at: &str,
    ) -> GraphResult<Option<PartyJoinRecord>> {
        let cypher = "MATCH (player:Player {player_id: $player_id}) \
             MATCH (party:Party {party_id: $party_id}) \
             OPTIONAL MATCH (player)-[i:INVITED_TO]->(party) \
             DELETE i \
             CREATE (player)-[:IN_PARTY {joined_at: $joined_at, role: 'member'}]->(party) \
             RETURN party.party_id as party_id, player.player_id as player_id, \
                    player.username as username";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("party_id", party_id)
                .param("player_id", player_id)
                .param("joined_at", joined_at),
            "joining party",
        )
        .await
    }

    /// Fetch a party with its member roster.
    pub async fn get(&self, party_id: &str) -> GraphResult<Option<PartyRecord>> {
        let cypher = "MATCH (party:Party {party_id: $party_id}) \
             RETURN party.party_id as party_id, party.game_id as game_id, \
                    party.max_size as max_size, party.is_public as is_public, \
                    party.created_at as created_at, \
                    [(member:Player)-[ip:IN_PARTY]->(party) | \
                     {player_id: member.player_id, username: member.username, \
                      role: ip.role, joined_at: ip.joined_at}] as members";
        fetch_one(
            &self.graph.graph().await,
            query(cypher).param("party_id", party_id),
            "fetching party",
        )
        .await
    }

    /// Resolve the party a player is currently in, if any.
    pub async fn party_of(&self, player_id: &str) -> GraphResult<Option<PartySummaryRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[:IN_PARTY]->(party:Party) \
             RETURN party.party_id as party_id, party.game_id as game_id, \
                    party.max_size as max_size, party.is_public as is_public";
        fetch_one(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "fetching player party",
        )
        .await
    }

    /// Apply a partial update to the party settings, reporting whether the
    /// party exists.
    pub async fn update(
        &self,
        party_id: &str,
        max_size: Option<i64>,
        is_public: Option<bool>,
        game_id: Option<&str>,
    ) -> GraphResult<bool> {
        let mut clauses = Vec::new();
        if max_size.is_some() {
            clauses.push("party.max_size = $max_size");
        }
        if is_public.is_some() {
            clauses.push("party.is_public = $is_public");
        }
        if game_id.is_some() {
            clauses.push("party.game_id = $game_id");
        }
        if clauses.is_empty() {
            return Ok(self.get(party_id).await?.is_some());
        }

        let cypher = format!(
            "MATCH (party:Party {{party_id: $party_id}}) SET {} RETURN count(party) as n",
            clauses.join(", ")
        );
        let mut q = query(&cypher).param("party_id", party_id);
        if let Some(max_size) = max_size {
            q = q.param("max_size", max_size);
        }
        if let Some(is_public) = is_public {
            q = q.param("is_public", is_public);
        }
        if let Some(game_id) = game_id {
            q = q.param("game_id", game_id);
        }
        fetch_touched(&self.graph.graph().await, q, "updating party").await
    }

    /// Remove a member from a party.
    pub async fn leave(&self, party_id: &str, player_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[ip:IN_PARTY]->\
                     (party:Party {party_id: $party_id}) \
             DELETE ip RETURN count(ip) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("party_id", party_id)
                .param("player_id", player_id),
            "leaving party",
        )
        .await
    }

    /// Delete a party along with every membership and invitation edge.
    pub async fn disband(&self, party_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (party:Party {party_id: $party_id}) \
             DETACH DELETE party RETURN count(party) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher).param("party_id", party_id),
            "disbanding party",
        )
        .await
    }
}
