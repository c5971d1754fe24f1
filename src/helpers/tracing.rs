use sentry::integrations::tracing::EventFilter;
use sentry::ClientInitGuard;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Environment variable with the stderr log directives.
const LOG_ENV: &str = "LINREG_PREDICT_LOG";

/// Environment variable with the Sentry breadcrumb and event directives.
const SENTRY_LOG_ENV: &str = "LINREG_PREDICT_SENTRY_LOG";

/// Initialises Sentry and the tracing subscriber.
///
/// Log lines go to stderr, so that stdout only carries the command output.
pub fn init(sentry_dsn: Option<String>, traces_sample_rate: f32) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate,
            ..Default::default()
        },
    ));

    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| event_filter(metadata.level()))
        .span_filter(|metadata| metadata.level() != &Level::TRACE)
        .with_filter(env_filter(SENTRY_LOG_ENV, "linreg_predict=debug")?);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(env_filter(LOG_ENV, "linreg_predict=info")?);

    tracing_subscriber::registry()
        .with(sentry_layer)
        .with(stderr_layer)
        .init();
    Ok(guard)
}

/// Directives from the environment variable, or the default ones when it is unset.
fn env_filter(env: &str, default_directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(env)
        .or_else(|_| EnvFilter::try_new(default_directives))
        .with_context(|| format!("invalid log directives in `{}`", env))
}

/// Warnings and errors become Sentry events, the rest only breadcrumbs.
fn event_filter(level: &Level) -> EventFilter {
    if level <= &Level::WARN {
        EventFilter::Event
    } else {
        EventFilter::Breadcrumb
    }
}
