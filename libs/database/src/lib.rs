//! Database connectivity for PostgreSQL via SeaORM
//!
//! Provides pool configuration and connection factories. The pool is opened
//! once per process and shared; connection errors are surfaced to the caller
//! on the single attempt — startup orchestration decides what is fatal.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{connect_from_config, PostgresConfig};
//! use secrets::DatabaseCredentials;
//!
//! let credentials = DatabaseCredentials::from_json(&payload)?;
//! let config = PostgresConfig::from_credentials(&credentials);
//! let db = connect_from_config(config).await?;
//! ```

pub mod postgres;
