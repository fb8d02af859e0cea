//! Error types for chatbot backend components

/// Common errors across backend components
#[derive(Debug, Clone)]
pub enum ChatbotError {
    /// Inbound request body does not match the expected shape
    Validation(String),
    /// The completion API call could not be completed
    Upstream(String),
}

impl std::fmt::Display for ChatbotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatbotError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ChatbotError::Upstream(msg) => write!(f, "LLM error: {}", msg),
        }
    }
}

impl std::error::Error for ChatbotError {}
