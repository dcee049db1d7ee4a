// Port Layer - Interfaces for external dependencies

pub mod time_provider; // For deterministic signatures
pub mod transport;

// Re-exports
pub use time_provider::{SystemTimeProvider, TimeProvider};
pub use transport::{Transport, TransportError};
