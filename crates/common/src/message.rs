//! Request/response wire types for the HTTP surface
//!
//! All shapes are flat JSON records. Lists may be empty but must be present;
//! a missing required field is a deserialization failure, surfaced as a
//! client error before any completion call is made.

use serde::{Deserialize, Serialize};

/// Body of `POST /summarize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Ordered list of message texts
    pub messages: Vec<String>,
}

/// Successful response of `POST /summarize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Generated summary
    pub summary: String,
}

/// Body of `POST /answer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Full chat history, oldest first
    pub history: Vec<String>,
    /// The user's question
    pub question: String,
}

/// Successful response of `POST /answer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    /// Generated answer
    pub answer: String,
}
