// Domain Layer - Call shape, registry, framing, envelope

pub mod call;
pub mod envelope;
pub mod framing;
pub mod registry;

// Re-exports
pub use call::{BoundCall, CallArgs};
pub use envelope::ResponseEnvelope;
pub use framing::{Framing, PreparedRequest};
pub use registry::EndpointRegistry;
