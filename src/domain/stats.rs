// Channel statistics snapshot returned by the data endpoint

/// Parallel label/value arrays, equal length by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl StatsSnapshot {
    /// Returns `None` when the arrays do not line up.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Option<Self> {
        if labels.len() != values.len() {
            return None;
        }
        Some(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entry at `index`, wrapping around the snapshot length.
    pub fn cyclic(&self, index: usize) -> Option<(&str, f64)> {
        if self.is_empty() {
            return None;
        }
        let i = index % self.len();
        Some((self.labels[i].as_str(), self.values[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_arrays_rejected() {
        assert!(StatsSnapshot::new(vec!["A".into()], vec![]).is_none());
    }

    #[test]
    fn test_cyclic_wraps() {
        let snapshot = StatsSnapshot::new(vec!["A".into(), "B".into()], vec![10.0, 20.0]).unwrap();
        assert_eq!(snapshot.cyclic(0), Some(("A", 10.0)));
        assert_eq!(snapshot.cyclic(1), Some(("B", 20.0)));
        assert_eq!(snapshot.cyclic(2), Some(("A", 10.0)));

        let empty = StatsSnapshot::new(vec![], vec![]).unwrap();
        assert_eq!(empty.cyclic(0), None);
    }
}
