//! Diagnostics for the CDL compiler.
//!
//! Two error classes flow through the compiler:
//! - recoverable semantic errors, reported as [`Diagnostic`] values that a
//!   validation pass accumulates or acts on;
//! - fatal storage failures, translated by [`check_status`] into
//!   [`FatalError`] values the top-level driver decides to act on.
//!
//! The core never panics and never exits the process.

mod diagnostic;
mod error_code;
mod status;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use status::{check_status, status_message, FatalError, SourceLocation, COMPONENT, STATUS_OK};
