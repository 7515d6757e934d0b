//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types for positions, texture coordinates and colors
//! - Logging utilities

pub mod math;
pub mod logging;
