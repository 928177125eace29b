// Rolling series domain model
use serde::Serialize;
use std::collections::VecDeque;

/// Default number of points kept on the views chart.
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bounded FIFO of chart points, oldest at the front.
///
/// Invariant: `len() <= capacity()`. Once full, every append evicts exactly
/// the oldest point.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    points: VecDeque<SeriesPoint>,
    capacity: usize,
}

impl SeriesBuffer {
    /// Returns `None` for a zero capacity, which could never hold a point.
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        Some(Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append at the tail, evicting the head once over capacity.
    pub fn append(&mut self, point: SeriesPoint) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }
}

impl Default for SeriesBuffer {
    fn default() -> Self {
        Self {
            points: VecDeque::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }
}
