//! Integration tests for the parameter system
//!
//! These tests verify that the parameter system behaves correctly in various scenarios.


// Tests for the Parameter sum type
mod parameter_tests;

// Tests for the ParameterSet collection
mod parameter_set_tests;

// Tests for prior densities and draws
mod prior_tests;
