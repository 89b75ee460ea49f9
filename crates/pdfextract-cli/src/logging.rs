use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `pdfextract=debug`.
pub const LOG_ENV: &str = "PDFEXTRACT_LOG";

/// Install a stderr subscriber when [`LOG_ENV`] is set.
///
/// Without it nothing is logged, so stderr stays silent and stdout only ever
/// carries the result.
pub fn init() {
    let Some(filter) = filter_from_env() else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn filter_from_env() -> Option<EnvFilter> {
    let directives = std::env::var(LOG_ENV).ok()?;
    Some(parse_filter(&directives))
}

/// Parse filter directives, falling back to `warn` when they are invalid.
fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}
