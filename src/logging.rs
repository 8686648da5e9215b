use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::{filter_fn, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{AppConfig, LogFormat, ANALYTICS_TARGET};

/// Stdout gets every event except analytics ones, in the configured format.
/// Analytics events go to a JSON file under `LOG_DIR` when it is set and are
/// dropped otherwise.
pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let stdout_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Console => tracing_subscriber::fmt::layer().boxed(),
    }
    .with_filter(filter_fn(|meta| meta.target() != ANALYTICS_TARGET));

    let analytics = config.log_dir.as_deref().map(analytics_layer).transpose()?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(analytics)
        .init();

    if let Some(dir) = &config.log_dir {
        tracing::info!(path = %analytics_log_path(dir).display(), "writing analytics events");
    }
    Ok(())
}

/// One file per process, so several workers can share a directory.
pub fn analytics_log_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref()
        .join(format!("societybot.{}.log", std::process::id()))
}

pub fn analytics_layer<S>(dir: &str) -> anyhow::Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create log dir {dir}"))?;
    let path = analytics_log_path(dir);
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open analytics log {}", path.display()))?;

    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_writer(Mutex::new(file))
        .with_filter(Targets::new().with_target(ANALYTICS_TARGET, Level::TRACE)))
}
