//! Data model and client configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::constants::{DEFAULT_BASE_URL, DEFAULT_SCOPE};

/// One CRM record (lead, note, ...): an unordered mapping from field name to
/// field value. The only identity a record has is whatever id field the
/// service assigned to it.
pub type Record = HashMap<String, String>;

/// HTTP POST form parameters
pub type Params = HashMap<String, String>;

/// Connection settings for a [`super::client::ZohoClient`]
///
/// The token is expected to be pre-issued; this library performs no login
/// exchange of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZohoConfig {
    /// API root, `https://crm.zoho.com/crm/private` in production
    pub base_url: String,
    /// Session token attached to every request as the `authtoken` field
    pub auth_token: Option<String>,
    /// API scope attached to every request, `crmapi` by default
    pub scope: String,
}

impl Default for ZohoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

impl ZohoConfig {
    /// Config for the production endpoint with the given session token
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(auth_token.into()),
            ..Self::default()
        }
    }

    /// Load settings from the environment (and a `.env` file if present):
    /// `ZOHO_BASE_URL`, `ZOHO_AUTH_TOKEN`, `ZOHO_SCOPE`. Unset variables
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            base_url: std::env::var("ZOHO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            auth_token: std::env::var("ZOHO_AUTH_TOKEN").ok(),
            scope: std::env::var("ZOHO_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
        }
    }
}
