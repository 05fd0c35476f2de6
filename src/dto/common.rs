//! Payload pieces shared across resources.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Gaming platforms supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Xbox,
    Playstation,
    Pc,
    Nintendo,
    Mobile,
}

impl Platform {
    /// Stable wire representation of the platform.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Xbox => "xbox",
            Platform::Playstation => "playstation",
            Platform::Pc => "pc",
            Platform::Nintendo => "nintendo",
            Platform::Mobile => "mobile",
        }
    }
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Offset pagination parameters for listing endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Number of records to skip.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of records to return, capped at 100.
    #[serde(default = "default_page_limit")]
    pub limit: i64,
}

fn default_page_limit() -> i64 {
    100
}

impl PageQuery {
    /// Limit clamped to the server-side ceiling.
    pub fn capped_limit(&self) -> i64 {
        self.limit.clamp(1, 100)
    }
}
