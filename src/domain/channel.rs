// Channel domain model - the "stocks" of the simulation
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of points in a synthetic trend.
pub const TREND_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub name: String,
    pub views: u64,
}

impl ChannelRecord {
    pub fn new(name: impl Into<String>, views: u64) -> Self {
        Self {
            name: name.into(),
            views,
        }
    }
}

/// Case-insensitive substring match on the channel name, input order kept.
pub fn filter_channels<'a>(records: &'a [ChannelRecord], query: &str) -> Vec<&'a ChannelRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Simulated week of views: `views` scaled by a uniform multiplier in [0.9, 1.1).
///
/// Presentation-only data. Not a forecast.
pub fn synthetic_trend<R: Rng + ?Sized>(views: u64, rng: &mut R) -> [u64; TREND_DAYS] {
    let mut trend = [0; TREND_DAYS];
    for slot in trend.iter_mut() {
        let multiplier = 0.9 + rng.gen_range(0.0..1.0) * 0.2;
        *slot = (views as f64 * multiplier).floor() as u64;
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn records() -> Vec<ChannelRecord> {
        vec![
            ChannelRecord::new("YouTube Music", 250),
            ChannelRecord::new("TikTok Trends", 150),
            ChannelRecord::new("MrBeast", 900),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let records = records();
        let filtered = filter_channels(&records, "");
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["YouTube Music", "TikTok Trends", "MrBeast"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = records();
        let filtered = filter_channels(&records, "YOU");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "YouTube Music");

        let filtered = filter_channels(&records, "t");
        assert_eq!(filtered.len(), 3);
        assert!(filter_channels(&records, "zzz").is_empty());
    }

    #[test]
    fn test_synthetic_trend_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let trend = synthetic_trend(1000, &mut rng);
            assert_eq!(trend.len(), 7);
            for value in trend {
                assert!((900..1100).contains(&value), "value {} out of range", value);
            }
        }
    }

    #[test]
    fn test_synthetic_trend_of_zero_views() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(synthetic_trend(0, &mut rng), [0; 7]);
    }
}
