use std::io;
use tracing::Metadata;
use tracing_subscriber::filter::{FilterFn, LevelFilter, filter_fn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

const CRATE_TARGET: &str = "column_filters";

pub fn default_level() -> LevelFilter {
    if cfg!(feature = "verbose-logging") {
        LevelFilter::TRACE
    } else if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

pub fn level_for(verbosity: u8) -> LevelFilter {
    let levels = [
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let base = levels
        .iter()
        .position(|level| *level == default_level())
        .unwrap_or(0);
    levels[(base + verbosity as usize).min(levels.len() - 1)]
}

fn own_events_only() -> FilterFn<impl Fn(&Metadata<'_>) -> bool> {
    filter_fn(|metadata| metadata.target().starts_with(CRATE_TARGET))
}

// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_for(verbosity))
        .with_filter(own_events_only());

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        tracing::debug!("Logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level_and_saturates() {
        assert!(level_for(1) >= default_level());
        assert_eq!(level_for(10), LevelFilter::TRACE);
    }
}
