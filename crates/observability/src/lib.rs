//! Logging setup shared by the service binaries.

pub mod logging;

pub use logging::{LogFormat, UnknownLogFormat};

/// Initialize process-wide logging from the environment
/// (`RUST_LOG`, `CLEANOPS_LOG_FORMAT`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    logging::init(LogFormat::from_env());
}

/// Initialize process-wide logging with an explicit output format.
pub fn init_with(format: LogFormat) {
    logging::init(format);
}
