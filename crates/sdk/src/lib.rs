//! Wrservices SDK - Lulu Ratings & Reviews Client Library
//!
//! Typed wrappers over the generic [`wrservices_core::ServiceClient`] for the
//! `ratereview/v1` service.
//!
//! # Example
//!
//! ```no_run
//! use wrservices_sdk::RatereviewClient;
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RatereviewClient::new("", "my-secret")?;
//!
//!     // Mutating call: sent as a form-encoded POST
//!     client.set_rating("book:1", "u1", 5)?;
//!
//!     // Read call: sent as a GET with a query string
//!     let reviews = client.get_reviews_for_entity(vec!["book:1"], json!({}))?;
//!     println!("Reviews: {}", reviews);
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod error;

pub use client::RatereviewClient;
pub use error::{Result, SdkError};
pub use wrservices_core::{CallArgs, ClientConfig, ClientError, ServiceError};
