use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the multiplayer gaming backend.
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::health::healthcheck,
        crate::routes::players::create_player,
        crate::routes::players::list_players,
        crate::routes::players::get_player,
        crate::routes::players::update_player,
        crate::routes::players::record_login,
        crate::routes::players::delete_player,
        crate::routes::games::create_game,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::games::update_game,
        crate::routes::games::delete_game,
        crate::routes::stats::create_stats,
        crate::routes::stats::list_player_stats,
        crate::routes::stats::get_stats,
        crate::routes::stats::increment_stats,
        crate::routes::stats::delete_stats,
        crate::routes::matches::record_match,
        crate::routes::matches::get_match,
        crate::routes::matches::list_player_matches,
        crate::routes::matches::list_game_matches,
        crate::routes::matches::delete_match,
        crate::routes::leaderboards::create_leaderboard,
        crate::routes::leaderboards::get_leaderboard,
        crate::routes::leaderboards::get_game_leaderboard,
        crate::routes::leaderboards::replace_entries,
        crate::routes::leaderboards::upsert_entry,
        crate::routes::leaderboards::delete_leaderboard,
        crate::routes::achievements::create_achievement,
        crate::routes::achievements::get_achievement,
        crate::routes::achievements::list_game_achievements,
        crate::routes::achievements::update_achievement,
        crate::routes::achievements::delete_achievement,
        crate::routes::achievements::start_tracking,
        crate::routes::achievements::list_player_achievements,
        crate::routes::achievements::get_player_achievement,
        crate::routes::achievements::update_progress,
        crate::routes::achievements::complete_achievement,
        crate::routes::achievements::delete_player_achievement,
        crate::routes::sessions::start_session,
        crate::routes::sessions::get_session,
        crate::routes::sessions::list_active_sessions,
        crate::routes::sessions::end_session,
        crate::routes::sessions::delete_session,
        crate::routes::notifications::create_notification,
        crate::routes::notifications::get_notification,
        crate::routes::notifications::list_notifications,
        crate::routes::notifications::mark_read,
        crate::routes::notifications::mark_all_read,
        crate::routes::notifications::delete_notification,
        crate::routes::notifications::purge_old_notifications,
        crate::routes::inventory::create_inventory,
        crate::routes::inventory::get_inventory,
        crate::routes::inventory::add_item,
        crate::routes::inventory::adjust_currency,
        crate::routes::inventory::remove_item,
        crate::routes::inventory::delete_inventory,
        crate::routes::social::create_player_node,
        crate::routes::social::get_player_node,
        crate::routes::social::update_status,
        crate::routes::social::update_username,
        crate::routes::social::delete_player_node,
        crate::routes::social::send_friend_request,
        crate::routes::social::accept_friend_request,
        crate::routes::social::pending_requests,
        crate::routes::social::list_friends,
        crate::routes::social::mutual_friends,
        crate::routes::social::friend_suggestions,
        crate::routes::social::set_friend_nickname,
        crate::routes::social::decline_friend_request,
        crate::routes::social::remove_friend,
        crate::routes::social::block_player,
        crate::routes::social::list_blocked,
        crate::routes::social::unblock_player,
        crate::routes::social::follow_player,
        crate::routes::social::list_following,
        crate::routes::social::list_followers,
        crate::routes::social::unfollow_player,
        crate::routes::messaging::create_conversation,
        crate::routes::messaging::send_message,
        crate::routes::messaging::get_conversation,
        crate::routes::messaging::list_conversations,
        crate::routes::messaging::list_messages,
        crate::routes::messaging::edit_message,
        crate::routes::messaging::set_muted,
        crate::routes::messaging::delete_message,
        crate::routes::messaging::leave_conversation,
        crate::routes::parties::create_party,
        crate::routes::parties::invite_to_party,
        crate::routes::parties::join_party,
        crate::routes::parties::get_party,
        crate::routes::parties::player_party,
        crate::routes::parties::update_party,
        crate::routes::parties::leave_party,
        crate::routes::parties::disband_party,
        crate::routes::clans::create_clan,
        crate::routes::clans::join_clan,
        crate::routes::clans::get_clan,
        crate::routes::clans::player_clan,
        crate::routes::clans::search_clans,
        crate::routes::clans::update_clan,
        crate::routes::clans::update_member,
        crate::routes::clans::leave_clan,
        crate::routes::clans::disband_clan,
    ),
    components(
        schemas(
            crate::dto::common::MessageResponse,
            crate::dto::common::Platform,
            crate::dto::health::ServiceInfo,
            crate::dto::health::HealthResponse,
            crate::dto::health::DatabaseHealth,
            crate::dto::players::PlayerSettingsDto,
            crate::dto::players::CreatePlayerRequest,
            crate::dto::players::UpdatePlayerRequest,
            crate::dto::players::PlayerResponse,
            crate::dto::games::CreateGameRequest,
            crate::dto::games::UpdateGameRequest,
            crate::dto::games::GameResponse,
            crate::dto::stats::CreateStatsRequest,
            crate::dto::stats::IncrementStatsRequest,
            crate::dto::stats::StatsResponse,
            crate::dto::matches::MatchPlayerDto,
            crate::dto::matches::CreateMatchRequest,
            crate::dto::matches::MatchResponse,
            crate::dto::leaderboards::CreateLeaderboardRequest,
            crate::dto::leaderboards::LeaderboardEntryDto,
            crate::dto::leaderboards::LeaderboardResponse,
            crate::dto::achievements::CreateAchievementRequest,
            crate::dto::achievements::UpdateAchievementRequest,
            crate::dto::achievements::AchievementResponse,
            crate::dto::achievements::StartPlayerAchievementRequest,
            crate::dto::achievements::UpdateProgressRequest,
            crate::dto::achievements::PlayerAchievementResponse,
            crate::dto::sessions::StartSessionRequest,
            crate::dto::sessions::SessionResponse,
            crate::dto::notifications::NotificationType,
            crate::dto::notifications::CreateNotificationRequest,
            crate::dto::notifications::NotificationResponse,
            crate::dto::inventory::InventoryItemDto,
            crate::dto::inventory::InventoryResponse,
            crate::dto::social::PlayerStatus,
            crate::dto::social::CreatePlayerNodeRequest,
            crate::dto::social::FriendRequestCreate,
            crate::dto::social::BlockRequest,
            crate::dto::social::FollowRequest,
            crate::dto::messaging::ConversationType,
            crate::dto::messaging::CreateConversationRequest,
            crate::dto::messaging::SendMessageRequest,
            crate::dto::messaging::EditMessageRequest,
            crate::dto::parties::CreatePartyRequest,
            crate::dto::parties::UpdatePartyRequest,
            crate::dto::parties::PartyInviteRequest,
            crate::dto::clans::ClanRole,
            crate::dto::clans::CreateClanRequest,
            crate::dto::clans::UpdateClanRequest,
            crate::dto::clans::ClanMemberUpdateRequest,
            crate::dao::graph::models::PlayerNodeRecord,
            crate::dao::graph::models::FriendRequestRecord,
            crate::dao::graph::models::FriendshipRecord,
            crate::dao::graph::models::FriendRecord,
            crate::dao::graph::models::MutualFriendRecord,
            crate::dao::graph::models::FriendSuggestionRecord,
            crate::dao::graph::models::FriendNicknameRecord,
            crate::dao::graph::models::BlockRecord,
            crate::dao::graph::models::ParticipantRecord,
            crate::dao::graph::models::ConversationRecord,
            crate::dao::graph::models::OtherParticipantRecord,
            crate::dao::graph::models::ConversationSummaryRecord,
            crate::dao::graph::models::MessageRecord,
            crate::dao::graph::models::PartyCreatedRecord,
            crate::dao::graph::models::PartyMemberRecord,
            crate::dao::graph::models::PartyRecord,
            crate::dao::graph::models::PartySummaryRecord,
            crate::dao::graph::models::PartyInviteRecord,
            crate::dao::graph::models::PartyJoinRecord,
            crate::dao::graph::models::ClanCreatedRecord,
            crate::dao::graph::models::ClanMemberRecord,
            crate::dao::graph::models::ClanRecord,
            crate::dao::graph::models::ClanMembershipRecord,
            crate::dao::graph::models::ClanSummaryRecord,
            crate::dao::graph::models::ClanJoinRecord,
            crate::dao::graph::models::ClanRoleRecord,
            crate::dao::graph::models::FollowTargetRecord,
            crate::dao::graph::models::FollowRecord,
        )
    ),
    tags(
        (name = "health", description = "Service status endpoints"),
        (name = "players", description = "Player profile management"),
        (name = "games", description = "Game catalog"),
        (name = "stats", description = "Per-game player statistics"),
        (name = "matches", description = "Match history"),
        (name = "leaderboards", description = "Ranked leaderboards"),
        (name = "achievements", description = "Achievement catalog and player progress"),
        (name = "sessions", description = "Play session tracking"),
        (name = "notifications", description = "Player notification inbox"),
        (name = "inventory", description = "Per-game item inventories"),
        (name = "social", description = "Friends, blocks and follows"),
        (name = "messaging", description = "Conversations and messages"),
        (name = "parties", description = "Temporary play groups"),
        (name = "clans", description = "Persistent player organizations"),
    )
)]
pub struct ApiDoc;
