// Channel stocks - polling, charting and chat client for the investing simulation
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
