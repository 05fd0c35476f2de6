//! Error type for Neo4j data access operations.

use neo4rs::{DeError, Error as Neo4jError};
use thiserror::Error;

/// Result alias for graph store operations.
pub type GraphResult<T> = std::result::Result<T, GraphDaoError>;

/// Errors raised by the Neo4j access layer, tagged with the operation involved.
#[derive(Debug, Error)]
pub enum GraphDaoError {
    /// A connection to the Bolt endpoint could not be opened.
    #[error("failed to connect to Neo4j at `{uri}`")]
    Connect {
        /// Bolt endpoint that was targeted.
        uri: String,
        /// Driver failure.
        #[source]
        source: Neo4jError,
    },
    /// The initial connection probe never succeeded.
    #[error("Neo4j probe failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Driver failure.
        #[source]
        source: Neo4jError,
    },
    /// A periodic health probe failed.
    #[error("Neo4j probe health check failed")]
    HealthPing {
        /// Driver failure.
        #[source]
        source: Neo4jError,
    },
    /// Constraint creation failed during bootstrap.
    #[error("failed to ensure constraint `{constraint}`")]
    EnsureConstraint {
        /// Constraint name.
        constraint: &'static str,
        /// Driver failure.
        #[source]
        source: Neo4jError,
    },
    /// A Cypher query failed.
    #[error("graph query failed while {context}")]
    Query {
        /// Operation being performed.
        context: &'static str,
        /// Driver failure.
        #[source]
        source: Neo4jError,
    },
    /// A returned row could not be decoded into the expected shape.
    #[error("failed to decode graph row while {context}")]
    Decode {
        /// Operation being performed.
        context: &'static str,
        /// Deserialization failure.
        #[source]
        source: DeError,
    },
}
