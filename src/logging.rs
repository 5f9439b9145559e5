//! Setting up diagnostics output.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the label decoder.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see why labels or pointers are rejected:
///   RUST_LOG=TRACE
///
/// Or to only see events from pointer resolution:
///   RUST_LOG=domain_label::base::name::pointer=TRACE
///
/// Calling this more than once is fine; later calls do nothing.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
