// Wrservices Infrastructure - HTTP Adapter
// Implements: Transport

pub mod http_transport;

pub use http_transport::{HttpTransport, HttpTransportConfig};
