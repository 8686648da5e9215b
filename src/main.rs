use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use societybot::config::AppConfig;
use societybot::errors::panic_response;
use societybot::handlers;
use societybot::logging;
use societybot::services::ai::groq::GroqProvider;
use societybot::services::ai::ollama::OllamaProvider;
use societybot::services::ai::LlmProvider;
use societybot::services::classifier::Classifier;
use societybot::services::keywords::KeywordTable;
use societybot::services::messaging::twilio::TwilioWhatsAppProvider;
use societybot::services::messaging::MessagingProvider;
use societybot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    logging::init(&config)?;

    let table = match &config.keywords_file {
        Some(path) => {
            tracing::info!(path = %path, "loading keyword table");
            KeywordTable::load(path)?
        }
        None => KeywordTable::builtin(),
    };
    let classifier = Classifier::new(table)?;

    let llm: Option<Box<dyn LlmProvider>> = match config.llm_provider.as_str() {
        "groq" => {
            anyhow::ensure!(!config.groq_api_key.is_empty(), "GROQ_API_KEY must be set when LLM_PROVIDER=groq");
            tracing::info!("using Groq LLM intent extraction (model: {})", config.groq_model);
            Some(Box::new(GroqProvider::new(config.groq_api_key.clone(), config.groq_model.clone())))
        }
        "ollama" => {
            tracing::info!("using Ollama LLM intent extraction (url: {})", config.ollama_url);
            Some(Box::new(OllamaProvider::new(config.ollama_url.clone(), config.ollama_model.clone())))
        }
        "none" | "" => {
            tracing::info!("using keyword rules only");
            None
        }
        other => anyhow::bail!("unknown LLM_PROVIDER '{other}' (expected groq, ollama or none)"),
    };

    let messaging: Option<Box<dyn MessagingProvider>> = if config.twilio_configured() {
        Some(Box::new(TwilioWhatsAppProvider::new(
            config.twilio_account_sid.clone(),
            config.twilio_auth_token.clone(),
            config.twilio_whatsapp_number.clone(),
        )))
    } else {
        tracing::warn!("Twilio credentials not found, running in demo mode");
        tracing::warn!("set TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN to enable outbound messages");
        None
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        classifier,
        llm,
        messaging,
    });

    let app = Router::new()
        .route("/", get(handlers::health::index).post(handlers::webhook::chat_webhook))
        .route("/health", get(handlers::health::health))
        .route("/webhook", post(handlers::webhook::chat_webhook))
        .route("/webhook/whatsapp", post(handlers::webhook::whatsapp_webhook))
        .route("/send", post(handlers::send::send_message))
        .route("/api/tools/book_service", post(handlers::tools::book_service))
        .route("/api/tools/check_status", post(handlers::tools::check_status))
        .route("/api/dev/message", post(handlers::dev::send_message))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if !config.webhook_base_url.is_empty() {
        tracing::info!(
            "point the Twilio WhatsApp webhook at {}/webhook/whatsapp",
            config.webhook_base_url.trim_end_matches('/')
        );
    }

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting {} on {addr}", config.bot_name);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
