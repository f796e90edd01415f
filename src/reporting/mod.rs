//! Diagnostics
//!
//! This module holds the structured logging used across the scan.

pub mod logging;
