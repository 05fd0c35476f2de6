//! Social graph routes: presence nodes, friendships, blocks, and follows.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        social::{
            BlockPairQuery, BlockRequest, CreatePlayerNodeRequest, FollowPairQuery, FollowRequest,
            FriendPairQuery, FriendRequestCreate, NicknameQuery, RequestPairQuery, StatusQuery,
            SuggestionsQuery, UsernameQuery,
        },
    },
    dao::graph::models::{
        BlockRecord, FollowRecord, FollowTargetRecord, FriendNicknameRecord, FriendRecord,
        FriendRequestRecord, FriendSuggestionRecord, FriendshipRecord, MutualFriendRecord,
        PlayerNodeRecord,
    },
    error::AppError,
    services::social_service,
    state::SharedState,
};

/// Presence, friendship, block, and follow endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/player-nodes", post(create_player_node))
        .route(
            "/player-nodes/{player_id}",
            get(get_player_node).delete(delete_player_node),
        )
        .route("/player-nodes/{player_id}/status", patch(update_status))
        .route("/player-nodes/{player_id}/username", patch(update_username))
        .route(
            "/friends/request",
            post(send_friend_request).delete(decline_friend_request),
        )
        .route("/friends/accept", post(accept_friend_request))
        .route("/friends/requests/{player_id}", get(pending_requests))
        .route("/friends/mutual/{player1_id}/{player2_id}", get(mutual_friends))
        .route("/friends/suggestions/{player_id}", get(friend_suggestions))
        .route("/friends/nickname", patch(set_friend_nickname))
        .route("/friends/{player_id}", get(list_friends))
        .route("/friends", delete(remove_friend))
        .route("/block", post(block_player).delete(unblock_player))
        .route("/block/{player_id}", get(list_blocked))
        .route("/follow", post(follow_player).delete(unfollow_player))
        .route("/follow/following/{player_id}", get(list_following))
        .route("/follow/followers/{player_id}", get(list_followers))
}

#[utoipa::path(
    post,
    path = "/api/v1/player-nodes",
    tag = "social",
    request_body = CreatePlayerNodeRequest,
    responses(
        (status = 201, description = "Player registered in the graph", body = PlayerNodeRecord),
        (status = 409, description = "Player node already exists", body = MessageResponse)
    )
)]
/// Register a player in the social graph.
pub async fn create_player_node(
    State(state): State<SharedState>,
    Json(payload): Json<CreatePlayerNodeRequest>,
) -> Result<(StatusCode, Json<PlayerNodeRecord>), AppError> {
    payload.validate()?;
    let record = social_service::create_player_node(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/player-nodes/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Presence node", body = PlayerNodeRecord),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Fetch a player's presence node.
pub async fn get_player_node(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerNodeRecord>, AppError> {
    Ok(Json(
        social_service::get_player_node(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/player-nodes/{player_id}/status",
    tag = "social",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Refreshed presence node", body = PlayerNodeRecord),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Update a player's presence status.
pub async fn update_status(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<PlayerNodeRecord>, AppError> {
    Ok(Json(
        social_service::update_status(&state, &player_id, query.status).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/player-nodes/{player_id}/username",
    tag = "social",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        UsernameQuery
    ),
    responses(
        (status = 200, description = "Refreshed presence node", body = PlayerNodeRecord),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Update the username mirrored on a player's presence node.
pub async fn update_username(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<PlayerNodeRecord>, AppError> {
    Ok(Json(
        social_service::update_username(&state, &player_id, &query.username).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/player-nodes/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player removed from the graph", body = MessageResponse),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Remove a player from the social graph.
pub async fn delete_player_node(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        social_service::delete_player_node(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/friends/request",
    tag = "social",
    request_body = FriendRequestCreate,
    responses(
        (status = 201, description = "Friend request sent", body = FriendRequestRecord),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Send a friend request between two players.
pub async fn send_friend_request(
    State(state): State<SharedState>,
    Json(payload): Json<FriendRequestCreate>,
) -> Result<(StatusCode, Json<FriendRequestRecord>), AppError> {
    payload.validate()?;
    let record = social_service::send_friend_request(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    post,
    path = "/api/v1/friends/accept",
    tag = "social",
    params(RequestPairQuery),
    responses(
        (status = 200, description = "Friendship created", body = FriendshipRecord),
        (status = 404, description = "No pending request", body = MessageResponse)
    )
)]
/// Accept a pending friend request.
pub async fn accept_friend_request(
    State(state): State<SharedState>,
    Query(query): Query<RequestPairQuery>,
) -> Result<Json<FriendshipRecord>, AppError> {
    Ok(Json(
        social_service::accept_friend_request(&state, &query.from_player_id, &query.to_player_id)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/friends/requests/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Pending friend requests", body = [FriendRequestRecord]))
)]
/// List friend requests waiting on a player.
pub async fn pending_requests(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<FriendRequestRecord>>, AppError> {
    Ok(Json(
        social_service::pending_requests(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/friends/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Friend list", body = [FriendRecord]))
)]
/// List a player's friends.
pub async fn list_friends(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<FriendRecord>>, AppError> {
    Ok(Json(social_service::list_friends(&state, &player_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/friends/mutual/{player1_id}/{player2_id}",
    tag = "social",
    params(
        ("player1_id" = String, Path, description = "First player"),
        ("player2_id" = String, Path, description = "Second player")
    ),
    responses((status = 200, description = "Players friended by both sides", body = [MutualFriendRecord]))
)]
/// List players friended by both sides of a pair.
pub async fn mutual_friends(
    State(state): State<SharedState>,
    Path((player1_id, player2_id)): Path<(String, String)>,
) -> Result<Json<Vec<MutualFriendRecord>>, AppError> {
    Ok(Json(
        social_service::mutual_friends(&state, &player1_id, &player2_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/friends/suggestions/{player_id}",
    tag = "social",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        SuggestionsQuery
    ),
    responses((status = 200, description = "Friends-of-friends suggestions", body = [FriendSuggestionRecord]))
)]
/// Suggest friends-of-friends, most mutual connections first.
pub async fn friend_suggestions(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<SuggestionsQuery>,
) -> Result<Json<Vec<FriendSuggestionRecord>>, AppError> {
    Ok(Json(
        social_service::friend_suggestions(&state, &player_id, query.limit).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/friends/nickname",
    tag = "social",
    params(NicknameQuery),
    responses(
        (status = 200, description = "Nickname stored", body = FriendNicknameRecord),
        (status = 404, description = "Friendship not found", body = MessageResponse)
    )
)]
/// Set the nickname stored on one side of a friendship.
pub async fn set_friend_nickname(
    State(state): State<SharedState>,
    Query(query): Query<NicknameQuery>,
) -> Result<Json<FriendNicknameRecord>, AppError> {
    Ok(Json(
        social_service::set_friend_nickname(
            &state,
            &query.player_id,
            &query.friend_id,
            &query.nickname,
        )
        .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/friends/request",
    tag = "social",
    params(RequestPairQuery),
    responses(
        (status = 200, description = "Request declined", body = MessageResponse),
        (status = 404, description = "No pending request", body = MessageResponse)
    )
)]
/// Drop a pending friend request.
pub async fn decline_friend_request(
    State(state): State<SharedState>,
    Query(query): Query<RequestPairQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        social_service::decline_friend_request(&state, &query.from_player_id, &query.to_player_id)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/friends",
    tag = "social",
    params(FriendPairQuery),
    responses(
        (status = 200, description = "Friendship removed", body = MessageResponse),
        (status = 404, description = "Friendship not found", body = MessageResponse)
    )
)]
/// Tear down a friendship in both directions.
pub async fn remove_friend(
    State(state): State<SharedState>,
    Query(query): Query<FriendPairQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        social_service::remove_friend(&state, &query.player_id, &query.friend_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/block",
    tag = "social",
    request_body = BlockRequest,
    responses(
        (status = 201, description = "Player blocked", body = BlockRecord),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Block a player, tearing down any friendship between the pair.
pub async fn block_player(
    State(state): State<SharedState>,
    Json(payload): Json<BlockRequest>,
) -> Result<(StatusCode, Json<BlockRecord>), AppError> {
    payload.validate()?;
    let record = social_service::block_player(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/block/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Blocked players", body = [BlockRecord]))
)]
/// List players blocked by the given player.
pub async fn list_blocked(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<BlockRecord>>, AppError> {
    Ok(Json(social_service::list_blocked(&state, &player_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/block",
    tag = "social",
    params(BlockPairQuery),
    responses(
        (status = 200, description = "Block lifted", body = MessageResponse),
        (status = 404, description = "No block between the pair", body = MessageResponse)
    )
)]
/// Lift a block.
pub async fn unblock_player(
    State(state): State<SharedState>,
    Query(query): Query<BlockPairQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        social_service::unblock_player(&state, &query.blocker_id, &query.blocked_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/follow",
    tag = "social",
    request_body = FollowRequest,
    responses(
        (status = 201, description = "Now following", body = FollowTargetRecord),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Follow another player.
pub async fn follow_player(
    State(state): State<SharedState>,
    Json(payload): Json<FollowRequest>,
) -> Result<(StatusCode, Json<FollowTargetRecord>), AppError> {
    payload.validate()?;
    let record = social_service::follow_player(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/follow/following/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Players being followed", body = [FollowRecord]))
)]
/// List players the given player follows.
pub async fn list_following(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<FollowRecord>>, AppError> {
    Ok(Json(
        social_service::list_following(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/follow/followers/{player_id}",
    tag = "social",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Followers", body = [FollowRecord]))
)]
/// List players following the given player.
pub async fn list_followers(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<FollowRecord>>, AppError> {
    Ok(Json(
        social_service::list_followers(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/follow",
    tag = "social",
    params(FollowPairQuery),
    responses(
        (status = 200, description = "Unfollowed", body = MessageResponse),
        (status = 404, description = "No follow between the pair", body = MessageResponse)
    )
)]
/// Stop following a player.
pub async fn unfollow_player(
    State(state): State<SharedState>,
    Query(query): Query<FollowPairQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        social_service::unfollow_player(&state, &query.follower_id, &query.following_id).await?,
    ))
}
