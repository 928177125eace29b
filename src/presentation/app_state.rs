// Application state for HTTP handlers
use crate::application::channel_service::ChannelService;
use crate::application::chat_service::ChatService;
use crate::domain::chart::ChartSpec;
use tokio::sync::watch;

pub struct AppState {
    /// Latest chart rendered by the polling loop
    pub chart: watch::Receiver<ChartSpec>,
    pub channel_service: ChannelService,
    pub chat_service: ChatService,
}
