// Backend ports - what the application layer needs from the outside world
use crate::domain::channel::ChannelRecord;
use crate::domain::stats::StatsSnapshot;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or non-success status.
    #[error("fetch from {endpoint} failed: {reason}")]
    Fetch {
        endpoint: String,
        status: Option<u16>,
        reason: String,
    },

    /// Body did not have the expected JSON shape.
    #[error("unexpected payload from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Fetch { status, .. } => *status,
            ClientError::Decode { .. } => None,
        }
    }
}

#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Channel names and view counts from the statistics endpoint
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ClientError>;
}

#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// All channels the backend tracks, in backend order
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ClientError>;
}

#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Send one chat message and return the assistant's reply
    async fn send_message(&self, message: &str) -> Result<String, ClientError>;

    /// Latest analysis text
    async fn fetch_analysis(&self) -> Result<String, ClientError>;
}
