//! Diagnostic logging setup.

use std::env;

use tracing::level_filters::LevelFilter;

/// Install the stderr subscriber.
///
/// Level comes from `PASSFORM_LOG` (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`), defaulting to `warn`. Quiet mode turns logging off.
pub fn init(quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        env::var("PASSFORM_LOG")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(LevelFilter::WARN)
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}
