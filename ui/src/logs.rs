//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Filter used unless `UI_LOG` was set when the bundle was built.
const DEFAULT_FILTER: &str = "error,ui=debug";

/// Install the console subscriber. Safe to call more than once.
pub fn init_logging() {
    let env_filter = EnvFilter::new(option_env!("UI_LOG").unwrap_or(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!("Initialized logs");
    }
}
