//! Driven adapters.

pub mod memory;
