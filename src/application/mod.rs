// Application layer - Use cases over the backend ports
pub mod backend;
pub mod channel_service;
pub mod chat_service;
pub mod polling_service;
