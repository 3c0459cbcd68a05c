//! LearnMate observability
//!
//! Structured logging on top of `tracing`: a level filter that yields to
//! `RUST_LOG`, human or JSON output on stderr, and an optional log file.

pub mod error;
pub mod logging;

pub use error::{ObservabilityError, Result};
pub use logging::{create_practice_span, create_session_span, LogManager};
