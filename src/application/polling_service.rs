// Polling service - keeps the views chart fed from the statistics endpoint
use crate::application::backend::StatsSource;
use crate::domain::chart::{render, ChartSpec};
use crate::domain::series::{SeriesBuffer, SeriesPoint};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Cursor into the stats snapshot plus the current chart color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollState {
    pub index: usize,
    pub color: u8,
}

impl PollState {
    fn advance(&mut self, color_step: u8) {
        self.index = self.index.wrapping_add(1);
        self.color = self.color.wrapping_add(color_step);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Appended(SeriesPoint),
    /// Fetch succeeded but the snapshot was empty
    NoData,
    Failed,
}

/// Owns the rolling buffer and is its only writer.
///
/// Readers get rendered charts through [`PollingService::subscribe`].
pub struct PollingService {
    source: Arc<dyn StatsSource>,
    buffer: SeriesBuffer,
    state: PollState,
    interval: Duration,
    color_step: u8,
    publisher: watch::Sender<ChartSpec>,
}

impl PollingService {
    pub fn new(
        source: Arc<dyn StatsSource>,
        buffer: SeriesBuffer,
        interval: Duration,
        color_step: u8,
    ) -> Self {
        let state = PollState::default();
        let (publisher, _) = watch::channel(render(&buffer, state.color));
        Self {
            source,
            buffer,
            state,
            interval,
            color_step,
            publisher,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ChartSpec> {
        self.publisher.subscribe()
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn buffer(&self) -> &SeriesBuffer {
        &self.buffer
    }

    /// One poll: fetch, append on success, publish the re-rendered chart.
    ///
    /// Failures leave the buffer and state untouched.
    pub async fn tick(&mut self) -> TickOutcome {
        let snapshot = match self.source.fetch_stats().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Stats poll failed: {}", e);
                return TickOutcome::Failed;
            }
        };

        let Some((label, value)) = snapshot.cyclic(self.state.index) else {
            tracing::debug!("Stats poll returned no channels");
            return TickOutcome::NoData;
        };

        let point = SeriesPoint::new(label, value);
        self.buffer.append(point.clone());
        self.state.advance(self.color_step);

        tracing::debug!(
            "Appended {} = {} (index={}, points={})",
            point.label,
            point.value,
            self.state.index,
            self.buffer.len()
        );

        self.publisher
            .send_replace(render(&self.buffer, self.state.color));
        TickOutcome::Appended(point)
    }

    /// Poll on a fixed interval until `shutdown` is true or its sender is dropped.
    ///
    /// Ticks are awaited in sequence; ticks that fire during a slow fetch are
    /// skipped rather than queued. Shutdown also abandons a fetch in flight.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            "Polling stats every {:?} (capacity {})",
            self.interval,
            self.buffer.capacity()
        );

        loop {
            tokio::select! {
                // checks the current value first, so a shutdown sent before run() counts
                _ = async { let _ = shutdown.wait_for(|stop| *stop).await; } => break,
                _ = async {
                    ticker.tick().await;
                    self.tick().await;
                } => {}
            }
        }

        tracing::info!("Polling stopped after {} points", self.state.index);
    }
}
