pub mod builders;

use std::sync::Once;

use pathfinder::types::CompletedSet;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary.
///
/// Output goes through the test writer, so it only shows for failing tests
/// (or with `--nocapture`). `RUST_LOG=pathfinder=debug` raises the level.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Completed set from id literals.
pub fn completed(ids: &[&str]) -> CompletedSet {
    ids.iter().map(|s| s.to_string()).collect()
}
