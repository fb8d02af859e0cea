//! Backend configuration

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "backend")]
#[command(about = "Chatbot backend - summarize and answer over group chat messages")]
pub struct BackendConfig {
    /// OpenAI API key (required; startup fails without it)
    #[arg(long, env = "CHATBOT_OPENAI_API_KEY")]
    pub openai_api_key: String,

    /// Model name to use
    #[arg(long, env = "CHATBOT_OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    pub openai_model: String,

    /// Completion API base URL
    #[arg(
        long = "openai-base-url",
        env = "CHATBOT_OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,

    /// HTTP server host
    #[arg(long, env = "CHATBOT_HTTP_HOST", default_value = "0.0.0.0")]
    pub http_host: String,

    /// HTTP server port
    #[arg(long, env = "CHATBOT_HTTP_PORT", default_value = "8000")]
    pub http_port: u16,

    /// Origin allowed to call the endpoints cross-site
    #[arg(
        long,
        env = "CHATBOT_CORS_ORIGIN",
        default_value = "https://your-wordpress-site.com"
    )]
    pub cors_origin: String,
}
