//! Clip Transform - copy selections and paste clipboard contents as
//! hex, base64, URL-encoding, backslash-x escapes, binary and C arrays.
//!
//! The converters in [`core`] are plain functions; the window in [`ui`] wires
//! them to a text editor and the system clipboard.

mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

use app::App;
use eframe::NativeOptions;
use tracing_appender::non_blocking::NonBlocking;

const DEFAULT_LOG_FILTER: &str = "info,clip_transform_lib=debug";

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Stdout logging, plus a plain-text file layer when a writer is given.
fn build_subscriber(
    file_writer: Option<NonBlocking>,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    use tracing_subscriber::prelude::*;

    // No ANSI colors in the file
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
    });

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stdout_layer)
}

/// Set up stdout and file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::util::SubscriberInitExt;

    let logs_dir = std::path::Path::new("logs");
    if std::fs::create_dir_all(logs_dir).is_err() {
        eprintln!("Failed to create logs directory, logging to stdout only");
        build_subscriber(None).init();
        return None;
    }

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new()
        .append(true)
        .open(logs_dir.join("clip_transform.log"))
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "\n=== Session started at {} ===\n", timestamp);
    }

    let file_appender = tracing_appender::rolling::never(logs_dir, "clip_transform.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    build_subscriber(Some(non_blocking)).init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    use tracing_subscriber::util::SubscriberInitExt;

    build_subscriber(None).init();
    None
}

/// Start the desktop application.
pub fn run() -> eframe::Result<()> {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Clip Transform");

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(concat!("Clip Transform v", env!("CARGO_PKG_VERSION")))
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Clip Transform",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
