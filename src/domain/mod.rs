// Domain rules shared by the stores and the UI
pub mod checksum;
pub mod errors;
pub mod validation;

// Re-export commonly used types
pub use checksum::simple_hash;
pub use errors::{SiteError, ValidationError};
pub use validation::{is_valid_email, is_valid_url, validate_url};
