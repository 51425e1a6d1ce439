//! Input/output, configuration and error handling

/// Command-line interface and mode selection
pub mod cli;
/// Service defaults and runtime configuration
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Rendering and PNG export
pub mod image;
/// Tile directory loading
pub mod loader;
/// Logger initialization
pub mod logging;
/// Attempt progress display for one-shot runs
pub mod progress;
