//! Neo4j access layer: connection management plus one repository per
//! relationship family.

pub mod blocks;
pub mod clans;
pub mod error;
pub mod follows;
pub mod friends;
pub mod manager;
pub mod messaging;
pub mod models;
pub mod parties;
pub mod players;

pub use error::{GraphDaoError, GraphResult};
pub use manager::{GraphManager, connect, ensure_constraints};

use neo4rs::{Graph, Query};
use serde::de::DeserializeOwned;

/// Run a query expected to yield at most one row and decode it.
pub(crate) async fn fetch_one<T: DeserializeOwned>(
    graph: &Graph,
    query: Query,
    context: &'static str,
) -> GraphResult<Option<T>> {
    let mut stream = graph
        .execute(query)
        .await
        .map_err(|source| GraphDaoError::Query { context, source })?;

    match stream
        .next()
        .await
        .map_err(|source| GraphDaoError::Query { context, source })?
    {
        Some(row) => row
            .to::<T>()
            .map(Some)
            .map_err(|source| GraphDaoError::Decode { context, source }),
        None => Ok(None),
    }
}

/// Run a query and decode every returned row.
pub(crate) async fn fetch_all<T: DeserializeOwned>(
    graph: &Graph,
    query: Query,
    context: &'static str,
) -> GraphResult<Vec<T>> {
    let mut stream = graph
        .execute(query)
        .await
        .map_err(|source| GraphDaoError::Query { context, source })?;

    let mut rows = Vec::new();
    while let Some(row) = stream
        .next()
        .await
        .map_err(|source| GraphDaoError::Query { context, source })?
    {
        rows.push(
            row.to::<T>()
                .map_err(|source| GraphDaoError::Decode { context, source })?,
        );
    }
    Ok(rows)
}

/// Run a mutation that reports how many graph elements it touched via an
/// `n` column, returning whether anything was affected.
pub(crate) async fn fetch_touched(
    graph: &Graph,
    query: Query,
    context: &'static str,
) -> GraphResult<bool> {
    let mut stream = graph
        .execute(query)
        .await
        .map_err(|source| GraphDaoError::Query { context, source })?;

    match stream
        .next()
        .await
        .map_err(|source| GraphDaoError::Query { context, source })?
    {
        Some(row) => {
            let touched: i64 = row
                .get("n")
                .map_err(|source| GraphDaoError::Decode { context, source })?;
            Ok(touched > 0)
        }
        None => Ok(false),
    }
}
