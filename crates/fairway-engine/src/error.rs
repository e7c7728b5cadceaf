//! Error types for the traffic engine binary.
//!
//! [`EngineError`] covers the engine's own glue: configuration
//! discovery and the end-of-run snapshot write. Subsystem errors
//! propagate through `main`'s boxed error return.

/// Error from the engine binary's own glue code.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: fairway_core::config::ConfigError,
    },

    /// Fleet snapshot serialization or write failed.
    #[error("snapshot error: {message}")]
    Snapshot {
        /// Description of the snapshot failure.
        message: String,
    },
}
