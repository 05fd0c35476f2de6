use axum::Router;

use crate::state::SharedState;

pub mod achievements;
pub mod clans;
pub mod docs;
pub mod games;
pub mod health;
pub mod inventory;
pub mod leaderboards;
pub mod matches;
pub mod messaging;
pub mod notifications;
pub mod parties;
pub mod players;
pub mod sessions;
pub mod social;
pub mod stats;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = players::router()
        .merge(games::router())
        .merge(stats::router())
        .merge(matches::router())
        .merge(leaderboards::router())
        .merge(achievements::router())
        .merge(sessions::router())
        .merge(notifications::router())
        .merge(inventory::router())
        .merge(social::router())
        .merge(messaging::router())
        .merge(parties::router())
        .merge(clans::router());

    let docs_router = docs::router(state.clone());

    health::router()
        .nest("/api/v1", api_router)
        .merge(docs_router)
        .with_state(state)
}
