//! Observability for the Pods storefront and tools.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with component/page context
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogSink` - Where formatted lines go (stderr, memory, browser console)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
