//! Shared test infrastructure for integration tests

pub mod assertions;
pub mod repository;
