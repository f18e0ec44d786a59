//! Error types for the binding engine.

use thiserror::Error;

/// Errors surfaced by context registration and configuration.
///
/// Per-member binding failures are not errors: they are logged and
/// skipped so that one bad member never blocks the rest of a pass.
#[derive(Debug, Error)]
pub enum VinculumError {
    /// A registration event arrived without a usable target payload.
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    /// The context was disposed and no longer accepts registrations.
    #[error("context disposed")]
    ContextDisposed,
    /// Binding configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}
