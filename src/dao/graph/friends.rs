use neo4rs::query;

use super::{
    error::GraphResult,
    fetch_all, fetch_one, fetch_touched,
    manager::GraphManager,
    models::{
        FriendNicknameRecord, FriendRecord, FriendRequestRecord, FriendshipRecord,
        FriendSuggestionRecord, MutualFriendRecord,
    },
};

/// Data Access Object for friend requests and friendships.
///
/// A friendship is stored as a pair of `FRIENDS_WITH` relationships, one in
/// each direction, so per-side properties like nicknames stay independent.
#[derive(Clone)]
pub struct FriendshipRepository {
    graph: GraphManager,
}

impl FriendshipRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Create a pending `SENT_REQUEST` relationship between two players.
    pub async fn send_request(
        &self,
        from_player_id: &str,
        to_player_id: &str,
        message: &str,
        sent_at: &str,
    ) -> GraphResult<Option<FriendRequestRecord>> {
        let cypher = "MATCH (from:Player {player_id: $from_id}) \
             MATCH (to:Player {player_id: $to_id}) \
             CREATE (from)-[r:SENT_REQUEST {sent_at: $sent_at, message: $message}]->(to) \
             RETURN from.player_id as from_player_id, from.username as from_username, \
                    to.player_id as to_player_id, to.username as to_username, \
                    r.message as message, r.sent_at as sent_at";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("from_id", from_player_id)
                .param("to_id", to_player_id)
                .param("message", message)
                .param("sent_at", sent_at),
            "sending friend request",
        )
        .await
    }

    /// Consume a pending request and create the reciprocal friendship.
    pub async fn accept_request(
        &self,
        from_player_id: &str,
        to_player_id: &str,
        since: &str,
    ) -> GraphResult<Option<FriendshipRecord>> {
        let cypher = "MATCH (from:Player {player_id: $from_id})-[r:SENT_REQUEST]->\
                     (to:Player {player_id: $to_id}) \
             DELETE r \
             CREATE (from)-[f:FRIENDS_WITH {since: $since}]->(to) \
             CREATE (to)-[:FRIENDS_WITH {since: $since}]->(from) \
             RETURN from.player_id as player1_id, to.player_id as player2_id, f.since as since";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("from_id", from_player_id)
                .param("to_id", to_player_id)
                .param("since", since),
            "accepting friend request",
        )
        .await
    }

    /// List pending requests addressed to a player.
    pub async fn pending_requests(&self, player_id: &str) -> GraphResult<Vec<FriendRequestRecord>> {
        let cypher = "MATCH (from:Player)-[r:SENT_REQUEST]->(to:Player {player_id: $player_id}) \
             RETURN from.player_id as from_player_id, from.username as from_username, \
                    to.player_id as to_player_id, to.username as to_username, \
                    r.message as message, r.sent_at as sent_at";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "listing pending friend requests",
        )
        .await
    }

    /// List a player's friends.
    pub async fn friends(&self, player_id: &str) -> GraphResult<Vec<FriendRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[f:FRIENDS_WITH]->(friend:Player) \
             RETURN friend.player_id as player_id, friend.username as username, \
                    friend.status as status, f.since as friends_since, f.nickname as nickname";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "listing friends",
        )
        .await
    }

    /// List players friended by both sides of a pair.
    pub async fn mutual_friends(
        &self,
        player1_id: &str,
        player2_id: &str,
    ) -> GraphResult<Vec<MutualFriendRecord>> {
        let cypher = "MATCH (p1:Player {player_id: $player1_id})-[:FRIENDS_WITH]->(mutual:Player)\
                     <-[:FRIENDS_WITH]-(p2:Player {player_id: $player2_id}) \
             RETURN mutual.player_id as player_id, mutual.username as username, \
                    mutual.status as status";
        fetch_all(
            &self.graph.graph().await,
            query(cypher)
                .param("player1_id", player1_id)
                .param("player2_id", player2_id),
            "listing mutual friends",
        )
        .await
    }

    /// Suggest friends-of-friends, excluding existing friends and blocks.
    pub async fn suggestions(
        &self,
        player_id: &str,
        limit: i64,
    ) -> GraphResult<Vec<FriendSuggestionRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[:FRIENDS_WITH]->(friend:Player)\
                     -[:FRIENDS_WITH]->(suggestion:Player) \
             WHERE NOT (p)-[:FRIENDS_WITH]->(suggestion) \
               AND NOT (p)-[:BLOCKED]->(suggestion) \
               AND suggestion.player_id <> $player_id \
             RETURN suggestion.player_id as player_id, suggestion.username as username, \
                    suggestion.status as status, count(friend) as mutual_friends \
             ORDER BY mutual_friends DESC \
             LIMIT $limit";
        fetch_all(
            &self.graph.graph().await,
            query(cypher)
                .param("player_id", player_id)
                .param("limit", limit),
            "listing friend suggestions",
        )
        .await
    }

    /// Set the nickname stored on one side of a friendship.
    pub async fn set_nickname(
        &self,
        player_id: &str,
        friend_id: &str,
        nickname: &str,
    ) -> GraphResult<Option<FriendNicknameRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[f:FRIENDS_WITH]->\
                     (friend:Player {player_id: $friend_id}) \
             SET f.nickname = $nickname \
             RETURN friend.player_id as player_id, friend.username as username, \
                    f.nickname as nickname";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("player_id", player_id)
                .param("friend_id", friend_id)
                .param("nickname", nickname),
            "setting friend nickname",
        )
        .await
    }

    /// Drop a pending request without creating a friendship.
    pub async fn decline_request(
        &self,
        from_player_id: &str,
        to_player_id: &str,
    ) -> GraphResult<bool> {
        let cypher = "MATCH (from:Player {player_id: $from_id})-[r:SENT_REQUEST]->\
                     (to:Player {player_id: $to_id}) \
             DELETE r RETURN count(r) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("from_id", from_player_id)
                .param("to_id", to_player_id),
            "declining friend request",
        )
        .await
    }

    /// Remove a friendship in both directions.
    pub async fn remove_friend(&self, player_id: &str, friend_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[f:FRIENDS_WITH]-\
                     (friend:Player {player_id: $friend_id}) \
             DELETE f RETURN count(f) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("player_id", player_id)
                .param("friend_id", friend_id),
            "removing friend",
        )
        .await
    }
}
