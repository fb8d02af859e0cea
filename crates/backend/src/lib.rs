//! Chatbot backend - HTTP façade over a chat-completion API
//!
//! Library surface so integration tests can build the router without
//! starting a process.

pub mod config;
pub mod prompt;
pub mod routes;
