//! File-based tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a rolling file under
//! the shop home instead of stderr. Set `SWEETSHOP_LOG` to adjust the
//! filter (defaults to `info`).

use anyhow::{Context, Result};
use sweet_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create logs dir {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "sweetshop.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("SWEETSHOP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(guard)
}
