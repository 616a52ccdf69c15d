use grammar_config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const TOKEN_TRACE: &str = "grammar_syntax::parser=trace";

/// Logs go to stderr next to the diagnostics, stdout only ever carries stats.
pub fn init_tracing(
    config: &Config,
    trace_tokens: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if trace_tokens || config.trace_tokens {
        filter = filter.add_directive(TOKEN_TRACE.parse()?);
    }

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    tracing::debug!(log_filter = %config.log_filter, trace_tokens, "logging initialised");

    Ok(())
}
