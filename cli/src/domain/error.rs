//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Catalog errors ────────────────────────────────────────────────────────────

/// The plugin catalog could not be loaded. Always fatal.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Improper JSON format in {path}.\nError: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Invalid app_search pattern for '{app}': {reason}")]
    InvalidPattern { app: String, reason: String },
}

// ── State errors ──────────────────────────────────────────────────────────────

/// Install-state persistence failures.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Cannot read install state {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid install state file {path}.\nError: {reason}\nFix or remove the file and re-run.")]
    Parse { path: String, reason: String },

    #[error("Cannot write to {path}.\nInstalled state is not updated. ({reason})")]
    Write { path: String, reason: String },
}

// ── Dispatch errors ───────────────────────────────────────────────────────────

/// An installer could not be located for a detected application.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No installer registered for {agent} {module}.{class_name}")]
    PluginResolution {
        agent: String,
        module: String,
        class_name: String,
    },

    #[error("Application '{app}' has no {agent} plugin")]
    NotSupported { app: String, agent: String },
}

// ── Prompt errors ─────────────────────────────────────────────────────────────

/// Reading operator input failed.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error("interrupted by user")]
    Interrupted,

    #[error("terminal prompt failed: {0}")]
    Io(String),
}

// ── Agent errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{binary} was not found on PATH. Install {agent} before configuring integrations.")]
    NotInstalled { agent: String, binary: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid self-detection pattern '{pattern}': {reason}")]
    InvalidSelfPattern { pattern: String, reason: String },
}

/// Returns `true` when `err` (or anything in its chain) is a user interrupt.
#[must_use]
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<PromptError>(),
            Some(PromptError::Interrupted)
        )
    })
}
