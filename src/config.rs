use std::env;

const DEFAULT_MIN_CONFIDENCE: f32 = 0.7;

/// Events logged under this target go only to the `LOG_DIR` file sink.
pub const ANALYTICS_TARGET: &str = "analytics";

#[derive(Clone, Debug, PartialEq)]
pub enum LogFormat {
    Console,
    Json,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub bot_name: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_whatsapp_number: String,
    pub webhook_base_url: String,
    pub keywords_file: Option<String>,
    pub llm_provider: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub llm_min_confidence: f32,
    pub log_format: LogFormat,
    pub log_dir: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            bot_name: env::var("BOT_NAME").unwrap_or_else(|_| "Society Assistant".to_string()),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_whatsapp_number: env::var("TWILIO_WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "whatsapp:+14155238886".to_string()),
            webhook_base_url: env::var("WEBHOOK_BASE_URL").unwrap_or_default(),
            keywords_file: env::var("KEYWORDS_FILE").ok().filter(|v| !v.trim().is_empty()),
            llm_provider: env::var("LLM_PROVIDER")
                .map(|v| v.to_lowercase())
                .unwrap_or_else(|_| "none".to_string()),
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            llm_min_confidence: parse_confidence(env::var("LLM_MIN_CONFIDENCE").ok().as_deref()),
            log_dir: env::var("LOG_DIR").ok().filter(|v| !v.trim().is_empty()),
            log_format: match env::var("LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Console,
            },
        }
    }

    /// Outbound WhatsApp sending needs both Twilio credentials.
    pub fn twilio_configured(&self) -> bool {
        !self.twilio_account_sid.is_empty() && !self.twilio_auth_token.is_empty()
    }
}

/// Falls back to the default for unparseable or NaN input and clamps the rest
/// into `0.0..=1.0`.
fn parse_confidence(raw: Option<&str>) -> f32 {
    raw.and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| !v.is_nan())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_MIN_CONFIDENCE)
}
