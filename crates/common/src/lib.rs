//! Common types and utilities shared across chatbot backend components
//!
//! This crate contains:
//! - Request/response wire types for the HTTP surface
//! - Shared errors
//! - Completion API client and the `Completion` seam

pub mod error;
pub mod llm;
pub mod message;

// Re-export commonly used types
pub use error::ChatbotError;
pub use llm::{
    ChatMessage, ChatRequest, ChatResponse, Choice, Completion, LlmClient, ResponseMessage,
};
pub use message::{AnswerRequest, AnswerResponse, SummarizeRequest, SummarizeResponse};
