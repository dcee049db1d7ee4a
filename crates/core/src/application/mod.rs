// Application Layer - Dispatch pipeline

pub mod client;
pub mod signing;

pub use client::{MethodHandle, ServiceClient};
pub use signing::sign;
