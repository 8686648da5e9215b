use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::services::classifier::Classifier;
use crate::services::messaging::MessagingProvider;

pub struct AppState {
    pub config: AppConfig,
    pub classifier: Classifier,
    /// `None` keeps classification purely rule-based.
    pub llm: Option<Box<dyn LlmProvider>>,
    /// `None` when Twilio credentials are missing (demo mode).
    pub messaging: Option<Box<dyn MessagingProvider>>,
}
