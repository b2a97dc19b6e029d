/// API layer: HTTP request/response normalization against the Worldbook service.
pub mod client;
pub mod errors;

pub use client::{ApiClient, ApiResponse};
pub use errors::ApiError;
