// Domain layer - Pure models and calculations, no I/O
pub mod channel;
pub mod chart;
pub mod chat;
pub mod page;
pub mod series;
pub mod simulator;
pub mod stats;
