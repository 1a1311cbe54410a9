//! Error types for Zoho CRM API calls

/// Error produced by a Zoho CRM API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZohoError {
    /// The service answered with an `<error>` element in the response body
    Vendor {
        /// Message text reported by the service
        message: String,
    },
    /// A request payload or response body did not have the expected shape
    Parse { detail: String },
    /// The HTTP collaborator failed to complete the POST
    Transport { detail: String },
}

impl std::fmt::Display for ZohoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZohoError::Vendor { message } => {
                write!(f, "Zoho CRM reported an error: {}", message)
            }
            ZohoError::Parse { detail } => {
                write!(f, "unexpected payload shape: {}", detail)
            }
            ZohoError::Transport { detail } => {
                write!(f, "transport failure: {}", detail)
            }
        }
    }
}

impl std::error::Error for ZohoError {}

impl ZohoError {
    /// Shorthand for a structural/parse failure
    pub fn parse(detail: impl Into<String>) -> Self {
        ZohoError::Parse {
            detail: detail.into(),
        }
    }

    /// Shorthand for a transport failure
    pub fn transport(detail: impl Into<String>) -> Self {
        ZohoError::Transport {
            detail: detail.into(),
        }
    }
}
