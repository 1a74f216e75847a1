//! File-based OpenTelemetry tracing.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! The view model and use cases open spans around every fetch
//! (`header_fetch`, `suggestion_fetch`, `posts_and_pages_fetch`); this module
//! only decides where they end up. Nothing is exported until
//! [`init_tracing`] is called, which keeps library consumers and tests
//! silent.
//!
//! Trace files rotate by size; see [`RotationPolicy`].

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotationPolicy, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
pub use init::{init_tracing, TRACE_FILE_NAME};
pub use tracer::create_tracer_provider;
