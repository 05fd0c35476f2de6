//! Business logic for the game catalog backed by the document store.

use mongodb::bson::{Document, oid::ObjectId};

use crate::{
    dao::documents::{games::GameRepository, models::GameEntity},
    dto::{
        common::MessageResponse,
        games::{CreateGameRequest, GameListQuery, GameResponse, UpdateGameRequest},
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<GameRepository, ServiceError> {
    Ok(GameRepository::new(state.require_documents().await?))
}

/// Add a game to the catalog.
pub async fn create_game(
    state: &SharedState,
    payload: CreateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let repository = repository(state).await?;

    let game = GameEntity {
        id: Some(ObjectId::new()),
        title: payload.title,
        publisher: payload.publisher,
        platforms: payload
            .platforms
            .iter()
            .map(|platform| platform.as_str().to_owned())
            .collect(),
        crossplay_enabled: payload.crossplay_enabled,
        max_players: payload.max_players,
        genres: payload.genres,
        release_date: now_bson(),
    };
    repository.insert(&game).await?;

    Ok(game.into())
}

/// Fetch a single catalog entry.
pub async fn get_game(state: &SharedState, id: &str) -> Result<GameResponse, ServiceError> {
    let repository = repository(state).await?;
    let game = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("game `{id}` not found")))?;
    Ok(game.into())
}

/// List catalog entries, optionally restricted to one platform.
pub async fn list_games(
    state: &SharedState,
    query: GameListQuery,
) -> Result<Vec<GameResponse>, ServiceError> {
    let repository = repository(state).await?;
    let games = match query.platform {
        Some(platform) => repository.list_for_platform(&platform).await?,
        None => {
            repository
                .list(query.skip, query.limit.clamp(1, 100))
                .await?
        }
    };
    Ok(games.into_iter().map(Into::into).collect())
}

/// Apply a partial update to a catalog entry and return the refreshed document.
pub async fn update_game(
    state: &SharedState,
    id: &str,
    payload: UpdateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    if repository.find_by_id(object_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    }

    let mut fields = Document::new();
    if let Some(title) = payload.title {
        fields.insert("title", title);
    }
    if let Some(publisher) = payload.publisher {
        fields.insert("publisher", publisher);
    }
    if let Some(platforms) = payload.platforms {
        let platforms: Vec<String> = platforms
            .iter()
            .map(|platform| platform.as_str().to_owned())
            .collect();
        fields.insert("platforms", platforms);
    }
    if let Some(crossplay_enabled) = payload.crossplay_enabled {
        fields.insert("crossplay_enabled", crossplay_enabled);
    }
    if let Some(max_players) = payload.max_players {
        fields.insert("max_players", max_players);
    }
    if let Some(genres) = payload.genres {
        fields.insert("genres", genres);
    }
    if !fields.is_empty() {
        repository.update_fields(object_id, fields).await?;
    }

    let game = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("game `{id}` not found")))?;
    Ok(game.into())
}

/// Remove a game from the catalog.
pub async fn delete_game(state: &SharedState, id: &str) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    }
    Ok(MessageResponse::new("Game deleted successfully"))
}
