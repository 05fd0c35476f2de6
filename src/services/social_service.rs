//! Business logic for the social graph: presence nodes, friendships, blocks,
//! and follows. Graph lookups that come back empty are surfaced as not-found
//! errors, since a missing row means a referenced player does not exist.

use crate::{
    dao::graph::{
        blocks::BlockRepository,
        follows::FollowRepository,
        friends::FriendshipRepository,
        models::{
            BlockRecord, FollowRecord, FollowTargetRecord, FriendNicknameRecord, FriendRecord,
            FriendRequestRecord, FriendSuggestionRecord, FriendshipRecord, MutualFriendRecord,
            PlayerNodeRecord,
        },
        players::PlayerNodeRepository,
    },
    dto::{
        common::MessageResponse,
        social::{BlockRequest, CreatePlayerNodeRequest, FollowRequest, FriendRequestCreate,
            PlayerStatus},
    },
    error::ServiceError,
    services::now_rfc3339,
    state::SharedState,
};

async fn nodes(state: &SharedState) -> Result<PlayerNodeRepository, ServiceError> {
    Ok(PlayerNodeRepository::new(state.require_graph().await?))
}

async fn friendships(state: &SharedState) -> Result<FriendshipRepository, ServiceError> {
    Ok(FriendshipRepository::new(state.require_graph().await?))
}

async fn blocks(state: &SharedState) -> Result<BlockRepository, ServiceError> {
    Ok(BlockRepository::new(state.require_graph().await?))
}

async fn follows(state: &SharedState) -> Result<FollowRepository, ServiceError> {
    Ok(FollowRepository::new(state.require_graph().await?))
}

fn player_not_found(player_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("player `{player_id}` not found"))
}

/// Register a player in the social graph.
pub async fn create_player_node(
    state: &SharedState,
    payload: CreatePlayerNodeRequest,
) -> Result<PlayerNodeRecord, ServiceError> {
    let repository = nodes(state).await?;

    if repository.get(&payload.player_id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "player node `{}` already exists",
            payload.player_id
        )));
    }

    repository
        .create(
            &payload.player_id,
            &payload.username,
            payload.status.as_str(),
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| player_not_found(&payload.player_id))
}

/// Fetch a player's presence node.
pub async fn get_player_node(
    state: &SharedState,
    player_id: &str,
) -> Result<PlayerNodeRecord, ServiceError> {
    let repository = nodes(state).await?;
    repository
        .get(player_id)
        .await?
        .ok_or_else(|| player_not_found(player_id))
}

/// Update a player's presence status.
pub async fn update_status(
    state: &SharedState,
    player_id: &str,
    status: PlayerStatus,
) -> Result<PlayerNodeRecord, ServiceError> {
    let repository = nodes(state).await?;
    repository
        .update(player_id, None, Some(status.as_str()))
        .await?
        .ok_or_else(|| player_not_found(player_id))
}

/// Update the username mirrored on a player's presence node.
pub async fn update_username(
    state: &SharedState,
    player_id: &str,
    username: &str,
) -> Result<PlayerNodeRecord, ServiceError> {
    let repository = nodes(state).await?;
    repository
        .update(player_id, Some(username), None)
        .await?
        .ok_or_else(|| player_not_found(player_id))
}

/// Remove a player from the social graph with every relationship attached.
pub async fn delete_player_node(
    state: &SharedState,
    player_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = nodes(state).await?;
    if !repository.delete(player_id).await? {
        return Err(player_not_found(player_id));
    }
    Ok(MessageResponse::new("Player node deleted successfully"))
}

/// Send a friend request between two players.
pub async fn send_friend_request(
    state: &SharedState,
    payload: FriendRequestCreate,
) -> Result<FriendRequestRecord, ServiceError> {
    let repository = friendships(state).await?;
    repository
        .send_request(
            &payload.from_player_id,
            &payload.to_player_id,
            &payload.message,
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| ServiceError::NotFound("one of the players was not found".to_owned()))
}

/// Accept a pending friend request, creating the reciprocal friendship.
pub async fn accept_friend_request(
    state: &SharedState,
    from_player_id: &str,
    to_player_id: &str,
) -> Result<FriendshipRecord, ServiceError> {
    let repository = friendships(state).await?;
    repository
        .accept_request(from_player_id, to_player_id, &now_rfc3339())
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "no pending request from `{from_player_id}` to `{to_player_id}`"
            ))
        })
}

/// List friend requests waiting on a player.
pub async fn pending_requests(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<FriendRequestRecord>, ServiceError> {
    let repository = friendships(state).await?;
    Ok(repository.pending_requests(player_id).await?)
}

/// List a player's friends.
pub async fn list_friends(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<FriendRecord>, ServiceError> {
    let repository = friendships(state).await?;
    Ok(repository.friends(player_id).await?)
}

/// List players friended by both sides of a pair.
pub async fn mutual_friends(
    state: &SharedState,
    player1_id: &str,
    player2_id: &str,
) -> Result<Vec<MutualFriendRecord>, ServiceError> {
    let repository = friendships(state).await?;
    Ok(repository.mutual_friends(player1_id, player2_id).await?)
}

/// Suggest friends-of-friends, most mutual connections first.
pub async fn friend_suggestions(
    state: &SharedState,
    player_id: &str,
    limit: i64,
) -> Result<Vec<FriendSuggestionRecord>, ServiceError> {
    let repository = friendships(state).await?;
    Ok(repository
        .suggestions(player_id, limit.clamp(1, 50))
        .await?)
}

/// Set the nickname stored on one side of a friendship.
pub async fn set_friend_nickname(
    state: &SharedState,
    player_id: &str,
    friend_id: &str,
    nickname: &str,
) -> Result<FriendNicknameRecord, ServiceError> {
    let repository = friendships(state).await?;
    repository
        .set_nickname(player_id, friend_id, nickname)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "no friendship between `{player_id}` and `{friend_id}`"
            ))
        })
}

/// Drop a pending friend request without creating a friendship.
pub async fn decline_friend_request(
    state: &SharedState,
    from_player_id: &str,
    to_player_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = friendships(state).await?;
    if !repository
        .decline_request(from_player_id, to_player_id)
        .await?
    {
        return Err(ServiceError::NotFound(format!(
            "no pending request from `{from_player_id}` to `{to_player_id}`"
        )));
    }
    Ok(MessageResponse::new("Friend request declined"))
}

/// Tear down a friendship in both directions.
pub async fn remove_friend(
    state: &SharedState,
    player_id: &str,
    friend_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = friendships(state).await?;
    if !repository.remove_friend(player_id, friend_id).await? {
        return Err(ServiceError::NotFound(format!(
            "no friendship between `{player_id}` and `{friend_id}`"
        )));
    }
    Ok(MessageResponse::new("Friend removed successfully"))
}

/// Block a player, tearing down any friendship between the pair.
pub async fn block_player(
    state: &SharedState,
    payload: BlockRequest,
) -> Result<BlockRecord, ServiceError> {
    let repository = blocks(state).await?;
    repository
        .block(
            &payload.blocker_id,
            &payload.blocked_id,
            payload.reason.as_deref(),
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| ServiceError::NotFound("one of the players was not found".to_owned()))
}

/// List players blocked by the given player.
pub async fn list_blocked(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<BlockRecord>, ServiceError> {
    let repository = blocks(state).await?;
    Ok(repository.list(player_id).await?)
}

/// Lift a block.
pub async fn unblock_player(
    state: &SharedState,
    blocker_id: &str,
    blocked_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = blocks(state).await?;
    if !repository.unblock(blocker_id, blocked_id).await? {
        return Err(ServiceError::NotFound(format!(
            "`{blocker_id}` has not blocked `{blocked_id}`"
        )));
    }
    Ok(MessageResponse::new("Player unblocked successfully"))
}

/// Follow another player.
pub async fn follow_player(
    state: &SharedState,
    payload: FollowRequest,
) -> Result<FollowTargetRecord, ServiceError> {
    let repository = follows(state).await?;
    repository
        .follow(&payload.follower_id, &payload.following_id, &now_rfc3339())
        .await?
        .ok_or_else(|| ServiceError::NotFound("one of the players was not found".to_owned()))
}

/// List players the given player follows.
pub async fn list_following(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<FollowRecord>, ServiceError> {
    let repository = follows(state).await?;
    Ok(repository.following(player_id).await?)
}

/// List players following the given player.
pub async fn list_followers(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<FollowRecord>, ServiceError> {
    let repository = follows(state).await?;
    Ok(repository.followers(player_id).await?)
}

/// Stop following a player.
pub async fn unfollow_player(
    state: &SharedState,
    follower_id: &str,
    following_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = follows(state).await?;
    if !repository.unfollow(follower_id, following_id).await? {
        return Err(ServiceError::NotFound(format!(
            "`{follower_id}` does not follow `{following_id}`"
        )));
    }
    Ok(MessageResponse::new("Unfollowed successfully"))
}
