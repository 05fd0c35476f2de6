//! Error type for MongoDB data access operations.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

/// Result alias for document store operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Errors raised by the MongoDB access layer, tagged with the collection involved.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection URI could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// Offending URI.
        uri: String,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// The client could not be built from the parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// The initial connection ping never succeeded.
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// A periodic health ping failed.
    #[error("MongoDB ping health check failed")]
    HealthPing {
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// Index creation failed during bootstrap.
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        /// Target collection.
        collection: &'static str,
        /// Index key description.
        index: &'static str,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// An insert failed.
    #[error("failed to insert into `{collection}`")]
    Insert {
        /// Target collection.
        collection: &'static str,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// A find or list query failed.
    #[error("failed to query `{collection}`")]
    Find {
        /// Target collection.
        collection: &'static str,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// An update failed.
    #[error("failed to update `{collection}`")]
    Update {
        /// Target collection.
        collection: &'static str,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
    /// A delete failed.
    #[error("failed to delete from `{collection}`")]
    Delete {
        /// Target collection.
        collection: &'static str,
        /// Driver failure.
        #[source]
        source: MongoError,
    },
}

impl MongoDaoError {
    fn driver_error(&self) -> &MongoError {
        match self {
            MongoDaoError::InvalidUri { source, .. }
            | MongoDaoError::ClientConstruction { source }
            | MongoDaoError::InitialPing { source, .. }
            | MongoDaoError::HealthPing { source }
            | MongoDaoError::EnsureIndex { source, .. }
            | MongoDaoError::Insert { source, .. }
            | MongoDaoError::Find { source, .. }
            | MongoDaoError::Update { source, .. }
            | MongoDaoError::Delete { source, .. } => source,
        }
    }

    /// Whether the underlying driver error is a unique index violation.
    pub fn is_duplicate_key(&self) -> bool {
        const DUPLICATE_KEY_CODE: i32 = 11000;
        match self.driver_error().kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
                write_error.code == DUPLICATE_KEY_CODE
            }
            _ => false,
        }
    }
}
