// Logging setup

use tracing::Level;

/// Initialize the tracing subscriber from CLI flags
pub fn init(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // try_init so repeated calls (tests) stay harmless
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
