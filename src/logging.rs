use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber. Call once at process start;
/// the boundary layer owns the decision of when that is.
pub fn init_tracing(log_level: Option<&str>) {
    let log_level = match log_level.unwrap_or("info") {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
