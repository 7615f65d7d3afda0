//! Blog list backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Request tracing middleware attaching a `Trace-Id` to every response.
pub use middleware::trace::Trace;
