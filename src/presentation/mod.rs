// Presentation layer - HTTP surface
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    channel_trend, get_analysis, get_chart, get_chat, get_page, health_check, home_page,
    list_channels, send_chat, simulate,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/pages", get(home_page))
        .route("/pages/", get(home_page))
        .route("/pages/:name", get(get_page))
        .route("/chart", get(get_chart))
        .route("/channels", get(list_channels))
        .route("/channels/:name/trend", get(channel_trend))
        .route("/chat", get(get_chat).post(send_chat))
        .route("/analysis", get(get_analysis))
        .route("/simulate", post(simulate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
