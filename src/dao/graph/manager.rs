//! Neo4j connection manager with automatic reconnection.

use std::{sync::Arc, time::Duration};

use neo4rs::{Graph, query};
use tokio::{
    sync::RwLock,
    time::{MissedTickBehavior, interval, sleep},
};
use tracing::{info, warn};

use super::error::{GraphDaoError, GraphResult};

const MAX_CONNECT_ATTEMPTS: u32 = 10;
const BASE_RETRY_DELAY_MS: u64 = 250;
const HEALTH_CHECK_INTERVAL_SECS: u64 = 30;

/// Cheaply clonable handle to the Neo4j connection.
#[derive(Clone)]
pub struct GraphManager {
    inner: Arc<GraphManagerInner>,
}

struct GraphManagerInner {
    graph: RwLock<Graph>,
    uri: String,
    user: String,
    password: String,
}

/// Connect to Neo4j and start a watcher that keeps the connection healthy.
pub async fn connect(uri: &str, user: &str, password: &str) -> GraphResult<GraphManager> {
    let graph = establish_connection(uri, user, password).await?;

    let inner = Arc::new(GraphManagerInner {
        graph: RwLock::new(graph),
        uri: uri.to_owned(),
        user: user.to_owned(),
        password: password.to_owned(),
    });

    GraphManagerInner::spawn_health_task(&inner);

    Ok(GraphManager { inner })
}

/// Ensure the uniqueness constraints required by the application are present.
pub async fn ensure_constraints(graph: &Graph) -> GraphResult<()> {
    let constraints: [(&'static str, &'static str); 4] = [
        (
            "player_player_id_unique",
            "CREATE CONSTRAINT player_player_id_unique IF NOT EXISTS \
             FOR (p:Player) REQUIRE p.player_id IS UNIQUE",
        ),
        (
            "conversation_conversation_id_unique",
            "CREATE CONSTRAINT conversation_conversation_id_unique IF NOT EXISTS \
             FOR (c:Conversation) REQUIRE c.conversation_id IS UNIQUE",
        ),
        (
            "party_party_id_unique",
            "CREATE CONSTRAINT party_party_id_unique IF NOT EXISTS \
             FOR (p:Party) REQUIRE p.party_id IS UNIQUE",
        ),
        (
            "clan_clan_id_unique",
            "CREATE CONSTRAINT clan_clan_id_unique IF NOT EXISTS \
             FOR (c:Clan) REQUIRE c.clan_id IS UNIQUE",
        ),
    ];

    for (name, statement) in constraints {
        graph
            .run(query(statement))
            .await
            .map_err(|source| GraphDaoError::EnsureConstraint {
                constraint: name,
                source,
            })?;
    }
    Ok(())
}

impl GraphManager {
    /// Clone the current driver handle.
    pub async fn graph(&self) -> Graph {
        let guard = self.inner.graph.read().await;
        guard.clone()
    }

    /// Issue a probe query against the current Neo4j connection.
    pub async fn ping(&self) -> GraphResult<()> {
        self.inner.ping().await
    }
}

impl GraphManagerInner {
    fn spawn_health_task(inner: &Arc<Self>) {
        let weak = Arc::downgrade(inner);
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(HEALTH_CHECK_INTERVAL_SECS));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let Some(inner) = weak.upgrade() else {
                    break;
                };

                if let Err(err) = inner.ping().await {
                    warn!(error = %err, "Neo4j health probe failed; attempting reconnect");
                    inner.reconnect().await;
                }
            }
        });
    }

    async fn ping(&self) -> GraphResult<()> {
        let graph = {
            let guard = self.graph.read().await;
            guard.clone()
        };

        graph
            .run(query("RETURN 1"))
            .await
            .map_err(|source| GraphDaoError::HealthPing { source })?;

        Ok(())
    }

    async fn reconnect(&self) {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(BASE_RETRY_DELAY_MS);

        loop {
            attempts += 1;
            match establish_connection(&self.uri, &self.user, &self.password).await {
                Ok(graph) => {
                    let mut guard = self.graph.write().await;
                    *guard = graph;
                    info!("Neo4j connection re-established");
                    break;
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        attempts,
                        "failed to re-establish Neo4j connection; retrying"
                    );
                    sleep(delay).await;
                    delay = (delay * 2).min(Duration::from_secs(5));
                }
            }
        }
    }
}

async fn establish_connection(uri: &str, user: &str, password: &str) -> GraphResult<Graph> {
    let graph = Graph::new(uri, user, password)
        .await
        .map_err(|source| GraphDaoError::Connect {
            uri: uri.to_owned(),
            source,
        })?;

    let mut attempts = 0;
    let mut delay = Duration::from_millis(BASE_RETRY_DELAY_MS);

    loop {
        match graph.run(query("RETURN 1")).await {
            Ok(()) => break,
            Err(err) => {
                attempts += 1;
                if attempts >= MAX_CONNECT_ATTEMPTS {
                    return Err(GraphDaoError::InitialPing {
                        attempts,
                        source: err,
                    });
                }
                sleep(delay).await;
                delay = (delay * 2).min(Duration::from_secs(5));
            }
        }
    }

    Ok(graph)
}
