//! Shared test infrastructure
//!
//! Container-backed fixtures for integration tests. Each `TestDatabase` is a
//! private PostgreSQL instance that disappears with the test.

mod postgres;

pub use postgres::TestDatabase;
