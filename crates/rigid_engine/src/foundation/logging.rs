//! Logging utilities and structured logging support
//!
//! The engine only ever talks to the `log` facade. Binaries pick the backend;
//! these helpers wire up `env_logger` the way the demo applications expect.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter (e.g. `"info"` or
/// `"rigid_engine=debug"`), still overridable through `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_filter(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::trace!("logger already initialized, keeping existing configuration");
    }
}
