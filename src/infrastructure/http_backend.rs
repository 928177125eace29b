// HTTP backend implementation over reqwest
use crate::application::backend::{AssistantBackend, ChannelDirectory, ClientError, StatsSource};
use crate::domain::channel::ChannelRecord;
use crate::domain::stats::StatsSnapshot;
use crate::infrastructure::config::BackendSettings;
use crate::infrastructure::wire::{decode_analysis, ChatReply, ChatRequest, StatsPayload};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const CHANNELS_PATH: &str = "/get-yt-channels-and-views/";
const ANALYZE_PATH: &str = "/analyze/";
const CHAT_PATH: &str = "/gemini-chat/";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    data_url: String,
    api_url: String,
}

impl HttpBackend {
    pub fn new(settings: &BackendSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        Ok(Self {
            client,
            data_url: settings.data_url.clone(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Send and check the status; the body is left to the caller
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|e| ClientError::Fetch {
            endpoint: endpoint.to_string(),
            status: e.status().map(|s| s.as_u16()),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Fetch {
                endpoint: endpoint.to_string(),
                status: Some(status.as_u16()),
                reason: format!("status {}: {}", status, body),
            });
        }

        Ok(response)
    }

    async fn read_body(response: reqwest::Response, endpoint: &str) -> Result<String, ClientError> {
        response.text().await.map_err(|e| ClientError::Fetch {
            endpoint: endpoint.to_string(),
            status: None,
            reason: format!("failed to read body: {}", e),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self
            .execute(self.client.get(url).header("Accept", "application/json"), url)
            .await?;
        let body = Self::read_body(response, url).await?;
        decode_json(&body, url)
    }
}

fn decode_json<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl StatsSource for HttpBackend {
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ClientError> {
        let payload: StatsPayload = self.get_json(&self.data_url).await?;
        payload
            .into_snapshot()
            .map_err(|reason| ClientError::Decode {
                endpoint: self.data_url.clone(),
                reason,
            })
    }
}

#[async_trait]
impl ChannelDirectory for HttpBackend {
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, ClientError> {
        let channels: Vec<ChannelRecord> = self.get_json(&self.api(CHANNELS_PATH)).await?;
        tracing::debug!("Fetched {} channels", channels.len());
        Ok(channels)
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    async fn send_message(&self, message: &str) -> Result<String, ClientError> {
        let url = self.api(CHAT_PATH);
        let request = self.client.post(&url).json(&ChatRequest { message });
        let response = self.execute(request, &url).await?;
        let body = Self::read_body(response, &url).await?;
        let reply: ChatReply = decode_json(&body, &url)?;
        Ok(reply.reply)
    }

    async fn fetch_analysis(&self) -> Result<String, ClientError> {
        let url = self.api(ANALYZE_PATH);
        let response = self.execute(self.client.get(&url), &url).await?;
        let body = Self::read_body(response, &url).await?;
        Ok(decode_analysis(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(&BackendSettings {
            data_url: format!("{}/data", base),
            api_url: format!("{}/", base),
            request_timeout_ms: 2000,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_stats() {
        let base = serve(Router::new().route(
            "/data",
            get(|| async { Json(json!({"channel_name": ["A", "B"], "view_count": [10, 20]})) }),
        ))
        .await;

        let snapshot = backend(&base).fetch_stats().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.cyclic(0), Some(("A", 10.0)));
    }

    #[tokio::test]
    async fn test_fetch_stats_server_error() {
        let base = serve(Router::new().route(
            "/data",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let err = backend(&base).fetch_stats().await.unwrap_err();
        assert!(matches!(err, ClientError::Fetch { .. }));
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_fetch_stats_malformed_body() {
        let base = serve(Router::new().route("/data", get(|| async { "not json" }))).await;

        let err = backend(&base).fetch_stats().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_stats_mismatched_arrays() {
        let base = serve(Router::new().route(
            "/data",
            get(|| async { Json(json!({"channel_name": ["A"], "view_count": []})) }),
        ))
        .await;

        let err = backend(&base).fetch_stats().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = backend(&format!("http://{}", addr)).fetch_stats().await.unwrap_err();
        assert!(matches!(err, ClientError::Fetch { status: None, .. }));
    }

    #[tokio::test]
    async fn test_list_channels() {
        let base = serve(Router::new().route(
            CHANNELS_PATH,
            get(|| async {
                Json(json!([
                    {"name": "YouTube Music", "views": 250},
                    {"name": "TikTok Trends", "views": 150}
                ]))
            }),
        ))
        .await;

        let channels = backend(&base).list_channels().await.unwrap();
        assert_eq!(channels[0], ChannelRecord::new("YouTube Music", 250));
        assert_eq!(channels.len(), 2);
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let base = serve(Router::new().route(
            CHAT_PATH,
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                Json(json!({"reply": format!("you said {}", message)}))
            }),
        ))
        .await;

        let reply = backend(&base).send_message("hi").await.unwrap();
        assert_eq!(reply, "you said hi");
    }

    #[tokio::test]
    async fn test_analysis_json_and_raw() {
        let base = serve(
            Router::new()
                .route(ANALYZE_PATH, get(|| async { Json(json!({"text": "bullish"})) }))
                .route("/raw/analyze/", get(|| async { "just text" })),
        )
        .await;

        assert_eq!(backend(&base).fetch_analysis().await.unwrap(), "bullish");
        let raw = backend(&format!("{}/raw", base));
        assert_eq!(raw.fetch_analysis().await.unwrap(), "just text");
    }
}
