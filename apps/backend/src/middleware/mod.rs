pub mod cors;
pub mod request_trace;
pub mod require_scope;
pub mod structured_logger;
pub mod trace_span;

pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use require_scope::RequireScope;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
