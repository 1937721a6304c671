//! Integration tests for dsge-core
//!
//! This module organizes all integration tests that exercise complete model
//! instances rather than individual components.

// Baseline scenario, updates and sub-specifications
pub mod end_to_end;

// Independent instances evaluated in parallel
pub mod parallel;
