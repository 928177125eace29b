// Wire formats of the backend endpoints and their validation
use crate::domain::stats::StatsSnapshot;
use serde::{Deserialize, Serialize};

/// `GET /data` - parallel arrays, index i of one matches index i of the other
#[derive(Debug, Deserialize)]
pub struct StatsPayload {
    pub channel_name: Vec<String>,
    pub view_count: Vec<f64>,
}

impl StatsPayload {
    pub fn into_snapshot(self) -> Result<StatsSnapshot, String> {
        let (names, views) = (self.channel_name.len(), self.view_count.len());
        StatsSnapshot::new(self.channel_name, self.view_count).ok_or_else(|| {
            format!(
                "channel_name has {} entries but view_count has {}",
                names, views
            )
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    text: String,
}

/// Analysis body is `{ "text": ... }` when JSON, otherwise the raw body is the text.
pub fn decode_analysis(body: &str) -> String {
    match serde_json::from_str::<AnalysisPayload>(body) {
        Ok(payload) => payload.text,
        Err(_) => body.to_string(),
    }
}
