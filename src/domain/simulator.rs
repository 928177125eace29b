// Market simulator - Channel statistics to synthetic stock-like prices, seeded for reproducibility
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const INITIAL_CAPITAL: f64 = 500.0;
pub const DEFAULT_DRIFT: f64 = 0.0005;
const PRICE_FLOOR: f64 = 0.01;
const DEFAULT_SUBSCRIBERS: u64 = 1000;
const DEFAULT_VIEWS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    #[serde(default, deserialize_with = "count_from_number_or_string")]
    pub subscriber_count: Option<u64>,
    #[serde(default, deserialize_with = "count_from_number_or_string")]
    pub view_count: Option<u64>,
}

/// YouTube `statistics` objects carry counts as strings ("10000")
fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Number(n)) => Ok(Some(n)),
        Some(Count::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid count {:?}", s))),
    }
}

impl ChannelStats {
    pub fn new(subscriber_count: u64, view_count: u64) -> Self {
        Self {
            subscriber_count: Some(subscriber_count),
            view_count: Some(view_count),
        }
    }

    fn subscribers(&self) -> u64 {
        self.subscriber_count.unwrap_or(DEFAULT_SUBSCRIBERS).max(1)
    }

    fn views(&self) -> u64 {
        self.view_count.unwrap_or(DEFAULT_VIEWS).max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimChannel {
    pub channel_name: String,
    #[serde(default)]
    pub statistics: ChannelStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelPrices {
    pub channel_name: String,
    pub prices: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioRun {
    pub channels: Vec<ChannelPrices>,
    pub portfolio: Vec<f64>,
    pub allocation: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub start: f64,
    pub end: f64,
    #[serde(rename = "return")]
    pub total_return: f64,
    pub daily_vol: f64,
}

fn gaussian(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}

/// Initial price grows with sqrt(subscribers); volatility shrinks with log(views).
pub fn map_stats_to_price_and_vol(stats: &ChannelStats) -> (f64, f64) {
    let subs = stats.subscribers() as f64;
    let views = stats.views() as f64;

    let price = (subs.sqrt() * 0.5).max(1.0);
    let vol = 0.02 + 0.08 / ((views + 10.0).ln() + 1.0);
    (price, vol)
}

/// Geometric random walk starting at the mapped price, floored at 0.01.
pub fn generate_price_series(stats: &ChannelStats, days: usize, seed: u64, drift: f64) -> Vec<f64> {
    if days == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let (s0, sigma) = map_stats_to_price_and_vol(stats);

    let mut prices = Vec::with_capacity(days);
    prices.push(s0);
    for _ in 1..days {
        let z = gaussian(&mut rng, 0.0, 1.0);
        let ret = (drift - 0.5 * sigma * sigma) + sigma * z;
        let last = prices[prices.len() - 1];
        prices.push((last * ret.exp()).max(PRICE_FLOOR));
    }
    prices
}

/// Per-day subscriber/view counts with small gaussian growth.
pub fn generate_stats_series(base: &ChannelStats, days: usize, seed: u64) -> Vec<ChannelStats> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut subs = base.subscribers() as f64;
    let mut views = base.views() as f64;

    let mut series = Vec::with_capacity(days);
    for _ in 0..days {
        let subs_change = gaussian(&mut rng, 0.0008, 0.005);
        let views_change = gaussian(&mut rng, 0.001, 0.02);

        subs = (subs * (1.0 + subs_change)).trunc().max(0.0);
        views = (views * (1.0 + views_change)).trunc().max(0.0);

        series.push(ChannelStats::new(subs as u64, views as u64));
    }
    series
}

/// Buy-and-hold across channels with `INITIAL_CAPITAL` spent on day 0.
///
/// Without an allocation every channel gets an equal weight. Channel `i` is
/// simulated with seed `seed + i * 100`.
pub fn simulate_portfolio(
    channels: &[SimChannel],
    days: usize,
    seed: u64,
    allocation: Option<BTreeMap<String, f64>>,
) -> PortfolioRun {
    if channels.is_empty() {
        return PortfolioRun::default();
    }

    let allocation = allocation.unwrap_or_else(|| {
        let weight = 1.0 / channels.len() as f64;
        channels
            .iter()
            .map(|c| (c.channel_name.clone(), weight))
            .collect()
    });

    let priced: Vec<ChannelPrices> = channels
        .iter()
        .enumerate()
        .map(|(i, c)| ChannelPrices {
            channel_name: c.channel_name.clone(),
            prices: generate_price_series(
                &c.statistics,
                days,
                seed.wrapping_add(i as u64 * 100),
                DEFAULT_DRIFT,
            ),
        })
        .collect();

    let shares: Vec<f64> = priced
        .iter()
        .map(|c| {
            let weight = allocation.get(&c.channel_name).copied().unwrap_or(0.0);
            match c.prices.first() {
                Some(&p0) if p0 > 0.0 => INITIAL_CAPITAL * weight / p0,
                _ => 0.0,
            }
        })
        .collect();

    let portfolio: Vec<f64> = (0..days)
        .map(|day| {
            priced
                .iter()
                .zip(&shares)
                .map(|(c, s)| s * c.prices[day])
                .sum::<f64>()
        })
        .collect();

    PortfolioRun {
        channels: priced,
        portfolio,
        allocation,
    }
}

pub fn summarize_portfolio(values: &[f64]) -> Option<PortfolioSummary> {
    let start = *values.first()?;
    let end = *values.last()?;
    let total_return = if start != 0.0 { end / start - 1.0 } else { 0.0 };

    let daily: Vec<f64> = values
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| w[1] / w[0] - 1.0)
        .collect();

    let daily_vol = if daily.is_empty() {
        0.0
    } else {
        let mean = daily.iter().sum::<f64>() / daily.len() as f64;
        let var = daily.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / daily.len() as f64;
        var.sqrt()
    };

    Some(PortfolioSummary {
        start,
        end,
        total_return,
        daily_vol,
    })
}
