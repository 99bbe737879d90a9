//! Utility functions for common operations.
//!
//! - **URL validation**: Scheme and transport-security checks for the API base URL

mod url_validator;

pub use url_validator::{validate_base_url, UrlValidationError};
