// Wrservices Core - Dispatch Logic & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{MethodHandle, ServiceClient};
pub use config::ClientConfig;
pub use domain::{BoundCall, CallArgs, EndpointRegistry, Framing, PreparedRequest, ResponseEnvelope};
pub use error::{ClientError, Result, ServiceError};
pub use port::{Transport, TransportError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
