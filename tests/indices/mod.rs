//! Integration tests for the index registry

// Tests for map construction and lookup
mod registry_tests;
