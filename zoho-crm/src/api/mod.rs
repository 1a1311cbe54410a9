//! Zoho CRM API module
//!
//! Everything needed for one round trip against the Zoho CRM service: the
//! row/field XML request encoder, the XML/JSON response decoders, the
//! operation methods on [`client::ZohoClient`], and the HTTP transport seam.

pub mod client;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod models;
pub mod modules;
pub mod transport;

pub use client::ZohoClient;
pub use error::ZohoError;
pub use models::{Params, Record, ZohoConfig};
pub use transport::{HttpTransport, Transport};
