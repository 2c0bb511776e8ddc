//! Lambda adapter that relays a chat message and its conversation history
//! to a caller-specified HTTP endpoint and returns the reply in an API
//! Gateway proxy envelope.

pub mod config;
pub mod handler;
pub mod http;
pub mod models;
pub mod utils;
