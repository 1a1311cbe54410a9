//! Zoho CRM API bridge.
//!
//! Maps the Zoho CRM HTTP API (XML and JSON payloads over POST) onto plain
//! Rust calls: insert, update, delete and query records and notes. Each call
//! is a single request/response round trip; records travel as flat
//! string-to-string mappings in both directions.
//!
//! Authentication is out of scope: the bundled [`HttpTransport`] attaches a
//! pre-issued session token to every request, and any other scheme can be
//! plugged in behind the [`Transport`] trait.
//!
//! # Example
//!
//! ```no_run
//! use zoho_crm::{Params, Record, ZohoClient, ZohoConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), zoho_crm::ZohoError> {
//! let client = ZohoClient::new(ZohoConfig::new("session-token"));
//!
//! let mut lead = Record::new();
//! lead.insert("First Name".to_string(), "Jane".to_string());
//! lead.insert("Company".to_string(), "Acme".to_string());
//!
//! let inserted = client.insert_records("Leads", &[lead], Params::new()).await?;
//! println!("created lead {:?}", inserted[0].get("Id"));
//! # Ok(())
//! # }
//! ```

pub mod api;

pub use api::client::ZohoClient;
pub use api::constants::{DEFAULT_BASE_URL, DEFAULT_SCOPE, NOTES_MODULE};
pub use api::error::ZohoError;
pub use api::models::{Params, Record, ZohoConfig};
pub use api::modules::{capitalize_module, select_columns};
pub use api::transport::{HttpTransport, Transport};
