//! RentItEase account shell.
//!
//! Serves the navigation bar, the path-based page router (`/login`,
//! `/register`, welcome banner) and the account flows behind them. Accounts
//! live in SQLite behind the [`domain::ports::UserRepository`] port.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use settings::ShellSettings;
