use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr; stdout carries the listing. Escape codes only
/// when stderr is a terminal.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}
