//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod catalog;
pub mod config;
pub mod detect;
pub mod error;
pub mod menu;
pub mod state;

pub use catalog::{AppDescriptor, Catalog};
pub use config::{ConfigInput, InstallerConfig};
pub use detect::{DEFAULT_SELF_PATTERN, SelfSignature, detect};
pub use error::{AgentError, CatalogError, ConfigError, DispatchError, PromptError, StateError};
pub use menu::MenuRow;
