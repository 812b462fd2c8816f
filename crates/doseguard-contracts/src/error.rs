//! Error types for the doseguard safety pipeline.
//!
//! All fallible operations in the subsystem return `SafetyResult<T>`.
//! Error variants carry enough context to produce actionable governance
//! entries and display-ready clinician messages.

use thiserror::Error;

/// The unified error type for the medication safety subsystem.
#[derive(Debug, Error)]
pub enum SafetyError {
    /// A required configuration value is missing or invalid.
    ///
    /// Raised when a formulary TOML document fails to parse or contains
    /// an unusable entry (e.g. a non-positive renal cutoff).
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The governance sink could not persist an event.
    ///
    /// This is fatal to the surrounding operation — a safety decision
    /// whose audit trail cannot be guaranteed must not proceed.
    #[error("governance write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// An override request failed structural validation.
    ///
    /// Carries every collected validation error. No governance event was
    /// emitted and no partial state exists.
    #[error("override rejected: {}", .errors.join("; "))]
    OverrideRejected { errors: Vec<String> },
}

/// Convenience alias used throughout the doseguard crates.
pub type SafetyResult<T> = Result<T, SafetyError>;
