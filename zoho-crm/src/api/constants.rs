//! Endpoint templates and fixed service constants

/// Production Zoho CRM API root
pub const DEFAULT_BASE_URL: &str = "https://crm.zoho.com/crm/private";

/// API scope sent with every request
pub const DEFAULT_SCOPE: &str = "crmapi";

/// Module name used by the note operations
pub const NOTES_MODULE: &str = "Notes";

/// Form field carrying the XML payload of write operations
pub const XML_DATA_FIELD: &str = "xmlData";

/// URL of an XML-format endpoint, e.g. `{base}/xml/Leads/insertRecords`
pub fn xml_url(base_url: &str, resource: &str, action: &str) -> String {
    format!("{}/xml/{}/{}", base_url.trim_end_matches('/'), resource, action)
}

/// URL of a JSON-format endpoint, e.g. `{base}/json/Leads/getRecords`
pub fn json_url(base_url: &str, resource: &str, action: &str) -> String {
    format!("{}/json/{}/{}", base_url.trim_end_matches('/'), resource, action)
}
