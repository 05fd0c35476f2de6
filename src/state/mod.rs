//! Shared application state holding handles to both database backends.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    dao::{documents::MongoManager, graph::GraphManager},
    error::ServiceError,
};

/// Cheaply clonable handle to the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state storing database handles.
///
/// Both stores start absent; the background supervisors install them once a
/// connection is established and clear them when the backend goes away, which
/// is how the service enters and leaves degraded mode.
pub struct AppState {
    documents: RwLock<Option<MongoManager>>,
    graph: RwLock<Option<GraphManager>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until the stores are installed.
    pub fn new() -> SharedState {
        Arc::new(Self {
            documents: RwLock::new(None),
            graph: RwLock::new(None),
        })
    }

    /// Obtain a handle to the document store, if one is installed.
    pub async fn documents(&self) -> Option<MongoManager> {
        let guard = self.documents.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the document store or fail with a degraded-mode error.
    pub async fn require_documents(&self) -> Result<MongoManager, ServiceError> {
        self.documents().await.ok_or(ServiceError::Degraded)
    }

    /// Install a document store handle, leaving degraded mode for record routes.
    pub async fn install_documents(&self, manager: MongoManager) {
        let mut guard = self.documents.write().await;
        *guard = Some(manager);
    }

    /// Remove the document store handle, entering degraded mode for record routes.
    pub async fn clear_documents(&self) {
        let mut guard = self.documents.write().await;
        guard.take();
    }

    /// Obtain a handle to the graph store, if one is installed.
    pub async fn graph(&self) -> Option<GraphManager> {
        let guard = self.graph.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the graph store or fail with a degraded-mode error.
    pub async fn require_graph(&self) -> Result<GraphManager, ServiceError> {
        self.graph().await.ok_or(ServiceError::Degraded)
    }

    /// Install a graph store handle, enabling the social routes.
    pub async fn install_graph(&self, manager: GraphManager) {
        let mut guard = self.graph.write().await;
        *guard = Some(manager);
    }

    /// Remove the graph store handle, disabling the social routes.
    pub async fn clear_graph(&self) {
        let mut guard = self.graph.write().await;
        guard.take();
    }
}
