//! Data access layer for both database backends.

/// Document store (MongoDB) repositories and connection management.
pub mod documents;
/// Graph store (Neo4j) repositories and connection management.
pub mod graph;
/// Storage abstraction shared by both backends.
pub mod storage;
