use neo4rs::query;

use super::{
    error::{GraphDaoError, GraphResult},
    fetch_all, fetch_one, fetch_touched,
    manager::GraphManager,
    models::{ConversationRecord, ConversationSummaryRecord, MessageRecord},
};

/// Data Access Object for conversations and the messages they contain.
///
/// Membership is a `MEMBER_OF` relationship from player to conversation;
/// messages hang off both their sender (`SENT`) and their conversation
/// (`CONTAINS`).
#[derive(Clone)]
pub struct ConversationRepository {
    graph: GraphManager,
}

impl ConversationRepository {
    pub fn new(graph: GraphManager) -> Self {
        Self { graph }
    }

    /// Create a conversation node.
    pub async fn create(
        &self,
        conversation_id: &str,
        conversation_type: &str,
        name: Option<&str>,
        created_at: &str,
    ) -> GraphResult<()> {
        let cypher = "CREATE (c:Conversation {conversation_id: $conversation_id, \
             type: $conversation_type, name: $name, created_at: $created_at, \
             last_message_at: null})";
        self.graph
            .graph()
            .await
            .run(
                query(cypher)
                    .param("conversation_id", conversation_id)
                    .param("conversation_type", conversation_type)
                    .param("name", name.map(str::to_owned))
                    .param("created_at", created_at),
            )
            .await
            .map_err(|source| GraphDaoError::Query {
                context: "creating conversation",
                source,
            })
    }

    /// Attach a batch of players to a conversation as members.
    pub async fn add_participants(
        &self,
        conversation_id: &str,
        participant_ids: &[String],
        joined_at: &str,
    ) -> GraphResult<()> {
        let cypher = "MATCH (c:Conversation {conversation_id: $conversation_id}) \
             UNWIND $participant_ids AS pid \
             MATCH (p:Player {player_id: pid}) \
             CREATE (p)-[:MEMBER_OF {joined_at: $joined_at, role: 'member', muted: false}]->(c)";
        self.graph
            .graph()
            .await
            .run(
                query(cypher)
                    .param("conversation_id", conversation_id)
                    .param("participant_ids", participant_ids.to_vec())
                    .param("joined_at", joined_at),
            )
            .await
            .map_err(|source| GraphDaoError::Query {
                context: "adding conversation participants",
                source,
            })
    }

    /// Fetch a conversation with its participant list.
    pub async fn get(&self, conversation_id: &str) -> GraphResult<Option<ConversationRecord>> {
        let cypher = "MATCH (c:Conversation {conversation_id: $conversation_id}) \
             RETURN c.conversation_id as conversation_id, c.type as conversation_type, \
                    c.name as name, c.created_at as created_at, \
                    c.last_message_at as last_message_at, \
                    [(p:Player)-[:MEMBER_OF]->(c) | {player_id: p.player_id, \
                     username: p.username, status: p.status}] as participants";
        fetch_one(
            &self.graph.graph().await,
            query(cypher).param("conversation_id", conversation_id),
            "fetching conversation",
        )
        .await
    }

    /// List a player's conversations, most recently active first.
    pub async fn list_for_player(
        &self,
        player_id: &str,
    ) -> GraphResult<Vec<ConversationSummaryRecord>> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[:MEMBER_OF]->(c:Conversation) \
             RETURN c.conversation_id as conversation_id, c.type as conversation_type, \
                    c.name as name, c.created_at as created_at, \
                    c.last_message_at as last_message_at, \
                    [(other:Player)-[:MEMBER_OF]->(c) WHERE other.player_id <> $player_id | \
                     {player_id: other.player_id, username: other.username}] as other_participants \
             ORDER BY c.last_message_at DESC";
        fetch_all(
            &self.graph.graph().await,
            query(cypher).param("player_id", player_id),
            "listing conversations",
        )
        .await
    }

    /// Create a message inside a conversation and bump its activity stamp.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message_id: &str,
        sender_id: &str,
        content: &str,
        timestamp: &str,
    ) -> GraphResult<Option<MessageRecord>> {
        let cypher = "MATCH (c:Conversation {conversation_id: $conversation_id}) \
             MATCH (sender:Player {player_id: $sender_id}) \
             CREATE (m:Message {message_id: $message_id, content: $content, \
                     timestamp: $timestamp, edited: false}) \
             CREATE (sender)-[:SENT]->(m) \
             CREATE (c)-[:CONTAINS]->(m) \
             SET c.last_message_at = $timestamp \
             RETURN m.message_id as message_id, $conversation_id as conversation_id, \
                    sender.player_id as sender_id, sender.username as sender_username, \
                    m.content as content, m.timestamp as timestamp, \
                    m.edited as edited, m.edited_at as edited_at";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("conversation_id", conversation_id)
                .param("message_id", message_id)
                .param("sender_id", sender_id)
                .param("content", content)
                .param("timestamp", timestamp),
            "sending message",
        )
        .await
    }

    /// Page through a conversation's messages, newest first.
    pub async fn messages(
        &self,
        conversation_id: &str,
        limit: i64,
        offset: i64,
    ) -> GraphResult<Vec<MessageRecord>> {
        let cypher = "MATCH (c:Conversation {conversation_id: $conversation_id})-[:CONTAINS]->\
                     (m:Message) \
             MATCH (sender:Player)-[:SENT]->(m) \
             RETURN m.message_id as message_id, $conversation_id as conversation_id, \
                    sender.player_id as sender_id, sender.username as sender_username, \
                    m.content as content, m.timestamp as timestamp, \
                    m.edited as edited, m.edited_at as edited_at \
             ORDER BY m.timestamp DESC \
             SKIP $offset \
             LIMIT $limit";
        fetch_all(
            &self.graph.graph().await,
            query(cypher)
                .param("conversation_id", conversation_id)
                .param("limit", limit)
                .param("offset", offset),
            "listing messages",
        )
        .await
    }

    /// Rewrite a message's content and flag it as edited.
    pub async fn edit_message(
        &self,
        message_id: &str,
        content: &str,
        edited_at: &str,
    ) -> GraphResult<Option<MessageRecord>> {
        let cypher = "MATCH (m:Message {message_id: $message_id}) \
             MATCH (sender:Player)-[:SENT]->(m) \
             MATCH (c:Conversation)-[:CONTAINS]->(m) \
             SET m.content = $content, m.edited = true, m.edited_at = $edited_at \
             RETURN m.message_id as message_id, c.conversation_id as conversation_id, \
                    sender.player_id as sender_id, sender.username as sender_username, \
                    m.content as content, m.timestamp as timestamp, \
                    m.edited as edited, m.edited_at as edited_at";
        fetch_one(
            &self.graph.graph().await,
            query(cypher)
                .param("message_id", message_id)
                .param("content", content)
                .param("edited_at", edited_at),
            "editing message",
        )
        .await
    }

    /// Mute or unmute a conversation for one member.
    pub async fn set_muted(
        &self,
        player_id: &str,
        conversation_id: &str,
        muted: bool,
    ) -> GraphResult<bool> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[m:MEMBER_OF]->\
                     (c:Conversation {conversation_id: $conversation_id}) \
             SET m.muted = $muted RETURN count(m) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("player_id", player_id)
                .param("conversation_id", conversation_id)
                .param("muted", muted),
            "muting conversation",
        )
        .await
    }

    /// Delete a message and its relationships.
    pub async fn delete_message(&self, message_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (m:Message {message_id: $message_id}) \
             DETACH DELETE m RETURN count(m) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher).param("message_id", message_id),
            "deleting message",
        )
        .await
    }

    /// Remove a member from a conversation.
    pub async fn leave(&self, player_id: &str, conversation_id: &str) -> GraphResult<bool> {
        let cypher = "MATCH (p:Player {player_id: $player_id})-[m:MEMBER_OF]->\
                     (c:Conversation {conversation_id: $conversation_id}) \
             DELETE m RETURN count(m) as n";
        fetch_touched(
            &self.graph.graph().await,
            query(cypher)
                .param("player_id", player_id)
                .param("conversation_id", conversation_id),
            "leaving conversation",
        )
        .await
    }
}
