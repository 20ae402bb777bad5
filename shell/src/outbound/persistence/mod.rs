//! SQLite persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain
//! types; row structs and the schema stay private to this module. The
//! synchronous SQLite driver is wrapped by `diesel-async`'s
//! `SyncConnectionWrapper` and pooled through `bb8`, so queries never block
//! the async workers.
//!
//! # Example
//!
//! ```ignore
//! use rentitease_shell::outbound::persistence::{
//!     run_migrations, DbPool, DieselUserRepository, PoolConfig,
//! };
//!
//! run_migrations("site.db").await?;
//! let pool = DbPool::new(PoolConfig::new("site.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
