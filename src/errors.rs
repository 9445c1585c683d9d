//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! Errors only arise while *constructing* scroll sources or parsing
//! configuration. The attach/detach/update lifecycle of
//! [`ScrollBoundAnimator`](crate::ScrollBoundAnimator) is deliberately
//! fail-soft and has no error channel: degenerate states (unattached,
//! unscrollable content) skip the update instead of reporting.

use thiserror::Error;

/// The error type for scroll source construction and configuration parsing.
#[derive(Error, Debug)]
pub enum ScrollBoundError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A scroll axis string was neither `"vertical"` nor `"horizontal"`.
    #[error("Invalid scroll axis: {0:?} (expected \"vertical\" or \"horizontal\")")]
    InvalidAxis(String),

    // ========================================================================
    // DOM Errors (wasm32 scroll sources)
    // ========================================================================
    /// No element matched the given CSS selector.
    #[error("Scroll container not found: {0:?}")]
    ElementNotFound(String),

    /// The browser window or document is not reachable from this context.
    #[error("No window/document available")]
    DocumentUnavailable,

    /// A JS-side call failed while wiring up the scroll listener.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Alias for `Result<T, ScrollBoundError>`.
pub type Result<T> = std::result::Result<T, ScrollBoundError>;
