use std::fmt;

/// Input rejected before anything is persisted or sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// New admin password shorter than the minimum length
    PasswordTooShort,
    /// Setup password and its confirmation differ
    PasswordMismatch,
    /// URL field left blank
    EmptyUrl,
    /// URL field does not parse as `scheme://host...`
    InvalidUrl,
    /// Signup email does not look like `local@domain.tld`
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least 4 characters")
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::EmptyUrl => write!(f, "Please enter a URL"),
            ValidationError::InvalidUrl => write!(f, "Please enter a valid URL"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error types for site operations. None of them are fatal: the UI turns each
/// one into a transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    Validation(ValidationError),
    /// Login password does not match the stored checksum
    Authentication,
    /// The backing key-value store refused a write
    Storage(String),
    /// Webhook transport failure. Logged and swallowed by the signup flow.
    Network(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Validation(err) => write!(f, "{}", err),
            SiteError::Authentication => write!(f, "Incorrect password"),
            SiteError::Storage(msg) => write!(f, "Could not save: {}", msg),
            SiteError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for SiteError {
    fn from(err: ValidationError) -> Self {
        SiteError::Validation(err)
    }
}
