//! Utility modules for the access gateway
//!
//! - **error**: Error taxonomy and HTTP error responses

pub mod error;

pub use error::{AccessError, ErrorDetail, ErrorResponse, Result};
