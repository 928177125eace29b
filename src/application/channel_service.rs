// Channel service - Use cases behind the channel selector
use crate::application::backend::{ChannelDirectory, ClientError};
use crate::domain::channel::{filter_channels, synthetic_trend, ChannelRecord, TREND_DAYS};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChannelService {
    directory: Arc<dyn ChannelDirectory>,
}

impl ChannelService {
    pub fn new(directory: Arc<dyn ChannelDirectory>) -> Self {
        Self { directory }
    }

    /// Channels whose name contains `query`, ignoring case
    pub async fn search(&self, query: &str) -> Result<Vec<ChannelRecord>, ClientError> {
        let channels = self.directory.list_channels().await?;
        Ok(filter_channels(&channels, query).into_iter().cloned().collect())
    }

    /// Fresh synthetic trend for the named channel, `None` if it is not listed.
    ///
    /// Values differ on every call.
    pub async fn trend(&self, name: &str) -> Result<Option<[u64; TREND_DAYS]>, ClientError> {
        let channels = self.directory.list_channels().await?;
        Ok(channels
            .iter()
            .find(|c| c.name == name)
            .map(|c| synthetic_trend(c.views, &mut rand::thread_rng())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticDirectory(Vec<ChannelRecord>);

    #[async_trait]
    impl ChannelDirectory for StaticDirectory {
        async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ClientError> {
            Ok(self.0.clone())
        }
    }

    fn service() -> ChannelService {
        ChannelService::new(Arc::new(StaticDirectory(vec![
            ChannelRecord::new("YouTube Music", 1000),
            ChannelRecord::new("TikTok Trends", 150),
        ])))
    }

    #[tokio::test]
    async fn test_search_filters_case_insensitively() {
        let found = service().search("you").await.unwrap();
        assert_eq!(found, vec![ChannelRecord::new("YouTube Music", 1000)]);
        assert_eq!(service().search("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_trend_for_known_channel() {
        let trend = service().trend("YouTube Music").await.unwrap().unwrap();
        assert!(trend.iter().all(|v| (900..1100).contains(v)));
        assert!(service().trend("Unknown").await.unwrap().is_none());
    }
}
