//! Report rendering.
//!
//! This module provides the output surfaces for a finished run:
//! - [`text`]: the one-line-per-strategy console report
//! - [`json`]: a machine-readable run report for scripting

pub mod json;
pub mod text;

pub use json::JsonReport;
