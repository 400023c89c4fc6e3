//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the UI runtime:
//! - Color math and clamping helpers
//! - Frame clock bookkeeping
//! - Logging setup

pub mod math;
pub mod time;
pub mod logging;
