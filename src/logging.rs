use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

/// Install the stderr log subscriber. Warnings only unless `verbose`.
pub fn init(verbose: bool) {
    let fmt = fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .try_init();
}
