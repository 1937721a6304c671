//! Integration tests for the steady-state solver

// Tests for the four-step pipeline and its fallback
mod solver_tests;
