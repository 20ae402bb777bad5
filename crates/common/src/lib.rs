//! Shared HTTP plumbing for the RentItEase services.
//!
//! Both deployables (the account shell and the product catalog) depend on
//! this crate for the error envelope, request tracing, health probes, the
//! HTML element tree used to render pages, and logging bootstrap. Nothing
//! here holds application state.

pub mod error;
pub mod health;
pub mod html;
pub mod telemetry;
pub mod trace;

pub use error::{ApiResult, Error, ErrorCode, ErrorValidationError};
pub use trace::{TRACE_ID_HEADER, Trace, TraceId};
