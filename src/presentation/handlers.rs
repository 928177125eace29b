// HTTP request handlers
use crate::domain::page::{Page, Route};
use crate::domain::simulator::{simulate_portfolio, summarize_portfolio, PortfolioRun, PortfolioSummary, SimChannel};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const LOADING: &str = "Loading…";
pub const NO_DATA: &str = "No data available";

const DEFAULT_SIM_DAYS: usize = 7;
const DEFAULT_SIM_SEED: u64 = 42;
const MAX_SIM_DAYS: usize = 3650;

#[derive(Serialize)]
pub struct Placeholder {
    pub message: &'static str,
}

fn placeholder(status: StatusCode, message: &'static str) -> Response {
    (status, Json(Placeholder { message })).into_response()
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct ChatInput {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct TrendResponse {
    pub name: String,
    pub trend: Vec<u64>,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub text: String,
}

#[derive(Deserialize)]
pub struct SimulationRequest {
    pub channels: Vec<SimChannel>,
    pub days: Option<usize>,
    pub seed: Option<u64>,
    pub allocation: Option<BTreeMap<String, f64>>,
}

#[derive(Serialize)]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub run: PortfolioRun,
    pub summary: Option<PortfolioSummary>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Home page
pub async fn home_page() -> Json<Page> {
    Json(Page::for_route(Route::Home))
}

/// Page behind one of the client-side routes
pub async fn get_page(Path(name): Path<String>) -> Response {
    match Route::parse(&format!("/{}", name)) {
        Some(route) => Json(Page::for_route(route)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Current views chart, or a loading placeholder until the first point lands
pub async fn get_chart(State(state): State<Arc<AppState>>) -> Response {
    let spec = state.chart.borrow().clone();
    if spec.data.labels.is_empty() {
        return placeholder(StatusCode::ACCEPTED, LOADING);
    }
    Json(spec).into_response()
}

pub async fn list_channels(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.channel_service.search(&query.q).await {
        Ok(channels) => Json(channels).into_response(),
        Err(e) => {
            tracing::error!("Error fetching channels: {}", e);
            placeholder(StatusCode::SERVICE_UNAVAILABLE, NO_DATA)
        }
    }
}

pub async fn channel_trend(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.channel_service.trend(&name).await {
        Ok(Some(trend)) => Json(TrendResponse {
            name,
            trend: trend.to_vec(),
        })
        .into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Error fetching trend for {}: {}", name, e);
            placeholder(StatusCode::SERVICE_UNAVAILABLE, NO_DATA)
        }
    }
}

pub async fn send_chat(State(state): State<Arc<AppState>>, Json(input): Json<ChatInput>) -> Response {
    Json(state.chat_service.send(&input.message).await).into_response()
}

pub async fn get_chat(State(state): State<Arc<AppState>>) -> Response {
    Json(state.chat_service.history().await).into_response()
}

pub async fn get_analysis(State(state): State<Arc<AppState>>) -> Response {
    match state.chat_service.analysis().await {
        Ok(text) => Json(AnalysisResponse { text }).into_response(),
        Err(e) => {
            tracing::error!("Error fetching analysis: {}", e);
            placeholder(StatusCode::SERVICE_UNAVAILABLE, NO_DATA)
        }
    }
}

pub async fn simulate(Json(request): Json<SimulationRequest>) -> Response {
    let days = request.days.unwrap_or(DEFAULT_SIM_DAYS);
    if days > MAX_SIM_DAYS {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    let run = simulate_portfolio(
        &request.channels,
        days,
        request.seed.unwrap_or(DEFAULT_SIM_SEED),
        request.allocation,
    );
    let summary = summarize_portfolio(&run.portfolio);
    Json(SimulationResponse { run, summary }).into_response()
}
