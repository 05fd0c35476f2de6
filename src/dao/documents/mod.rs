//! MongoDB access layer: connection management plus one repository per collection.

pub mod achievements;
pub mod error;
pub mod games;
pub mod inventory;
pub mod leaderboards;
pub mod manager;
pub mod matches;
pub mod models;
pub mod notifications;
pub mod players;
pub mod sessions;
pub mod stats;

pub use error::{MongoDaoError, MongoResult};
pub use manager::{MongoManager, connect, ensure_indexes};
