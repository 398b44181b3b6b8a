//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `TickError`, so functions can simply return `Result<T>`.
use crate::error::TickError;

/// Workspace-wide `Result` alias with `TickError` as the default error.
pub type Result<T, E = TickError> = std::result::Result<T, E>;
