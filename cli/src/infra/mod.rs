//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process listing, command
//! execution, terminal prompts, state and catalog files, and the built-in
//! installers.
//!
//! Imports from `crate::domain` and `crate::application` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod catalog;
pub mod command_runner;
pub mod installers;
pub mod logging;
pub mod process;
pub mod prompt;
pub mod state;
