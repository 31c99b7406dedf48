/// OpenHub API layer: endpoint URLs, errors, and the blocking HTTP client.
pub mod client;
pub mod endpoint;
pub mod errors;

pub use client::InfoClient;
pub use errors::ApiError;
