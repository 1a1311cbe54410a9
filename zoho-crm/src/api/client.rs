//! Zoho CRM client and its record/note operations
//!
//! Each operation is one request/response round trip: build the form
//! parameters (fixed flags merged with caller overrides, caller wins),
//! encode the XML payload for writes, POST through the transport, decode.
//! No state survives a call.

use log::debug;

use super::constants::{self, NOTES_MODULE, XML_DATA_FIELD};
use super::decode;
use super::encode;
use super::error::ZohoError;
use super::models::{Params, Record, ZohoConfig};
use super::modules::select_columns;
use super::transport::{HttpTransport, Transport};

/// Client for the Zoho CRM API
///
/// Operations take the module name ("Leads", "Potentials", ...) verbatim;
/// see [`super::modules::capitalize_module`] when starting from a lowercase
/// table name. The client holds no cross-call state and can be shared
/// between tasks.
pub struct ZohoClient<T: Transport = HttpTransport> {
    config: ZohoConfig,
    transport: T,
}

impl ZohoClient<HttpTransport> {
    /// Client over the bundled reqwest transport
    pub fn new(config: ZohoConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self { config, transport }
    }

    /// Client configured from `ZOHO_*` environment variables
    pub fn from_env() -> Self {
        Self::new(ZohoConfig::from_env())
    }
}

impl<T: Transport> ZohoClient<T> {
    /// Client over a caller-supplied transport
    pub fn with_transport(config: ZohoConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Insert records into a module and return the inserted records as the
    /// service echoes them back (vendor-assigned `Id`, audit fields).
    pub async fn insert_records(
        &self,
        resource: &str,
        records: &[Record],
        extra_params: Params,
    ) -> Result<Vec<Record>, ZohoError> {
        debug!("inserting {} record(s) into {}", records.len(), resource);

        let mut params = Params::from([
            ("newFormat".to_string(), "1".to_string()),
            ("duplicateCheck".to_string(), "2".to_string()),
        ]);
        params.extend(extra_params);
        params.insert(
            XML_DATA_FIELD.to_string(),
            encode::encode_rows(resource, records)?,
        );

        let url = constants::xml_url(&self.config.base_url, resource, "insertRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::check_success(&body)?;
        decode::inserted_records(&body)
    }

    /// Update the record with the given id. The batch rows are applied to
    /// that record; success is the absence of a vendor error.
    pub async fn update_records(
        &self,
        resource: &str,
        id: &str,
        records: &[Record],
        extra_params: Params,
    ) -> Result<(), ZohoError> {
        debug!("updating record {} in {}", id, resource);

        let mut params = Params::from([
            ("newFormat".to_string(), "1".to_string()),
            ("id".to_string(), id.to_string()),
        ]);
        params.extend(extra_params);
        params.insert(
            XML_DATA_FIELD.to_string(),
            encode::encode_rows(resource, records)?,
        );

        let url = constants::xml_url(&self.config.base_url, resource, "updateRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::check_success(&body)
    }

    /// Delete one record by id
    pub async fn delete_record(
        &self,
        resource: &str,
        id: &str,
        extra_params: Params,
    ) -> Result<(), ZohoError> {
        debug!("deleting record {} from {}", id, resource);

        let mut params = Params::from([
            ("newFormat".to_string(), "1".to_string()),
            ("id".to_string(), id.to_string()),
        ]);
        params.extend(extra_params);

        let url = constants::xml_url(&self.config.base_url, resource, "deleteRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::check_success(&body)
    }

    /// Query records from a module.
    ///
    /// `columns` narrows the answer to the named columns (the id column is
    /// always included by the service); an empty slice selects everything.
    /// `extra_params` carries the service's filtering parameters
    /// (`fromIndex`, `searchColumn`, ...) and overrides the fixed flags.
    pub async fn get_records(
        &self,
        resource: &str,
        columns: &[&str],
        extra_params: Params,
    ) -> Result<Vec<Record>, ZohoError> {
        debug!("querying {} ({} column(s))", resource, columns.len());

        let mut params = Params::from([
            ("newFormat".to_string(), "2".to_string()),
            (
                "selectColumns".to_string(),
                select_columns(resource, columns),
            ),
        ]);
        params.extend(extra_params);

        let url = constants::json_url(&self.config.base_url, resource, "getRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::json_rows(&body, resource)
    }

    /// List the notes attached to an entity
    pub async fn get_notes_for_entity(&self, entity_id: &str) -> Result<Vec<Record>, ZohoError> {
        debug!("fetching notes for entity {}", entity_id);

        let params = Params::from([
            ("newFormat".to_string(), "1".to_string()),
            ("id".to_string(), entity_id.to_string()),
            ("parentModule".to_string(), "All".to_string()),
        ]);

        let url = constants::json_url(&self.config.base_url, NOTES_MODULE, "getRelatedRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::json_rows(&body, NOTES_MODULE)
    }

    /// Attach a new note to an entity
    pub async fn add_note(
        &self,
        entity_id: &str,
        title: &str,
        content: &str,
    ) -> Result<(), ZohoError> {
        debug!("adding note to entity {}", entity_id);

        let note = Record::from([
            ("entityId".to_string(), entity_id.to_string()),
            ("Note Title".to_string(), title.to_string()),
            ("Note Content".to_string(), content.to_string()),
        ]);
        let params = Params::from([
            ("newFormat".to_string(), "1".to_string()),
            (
                XML_DATA_FIELD.to_string(),
                encode::encode_rows(NOTES_MODULE, &[note])?,
            ),
        ]);

        let url = constants::xml_url(&self.config.base_url, NOTES_MODULE, "insertRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::check_success(&body)
    }

    /// Rewrite the title and content of an existing note
    pub async fn update_note(
        &self,
        note_id: &str,
        title: &str,
        content: &str,
    ) -> Result<(), ZohoError> {
        debug!("updating note {}", note_id);

        let note = Record::from([
            ("Note Title".to_string(), title.to_string()),
            ("Note Content".to_string(), content.to_string()),
        ]);
        let params = Params::from([
            ("newFormat".to_string(), "1".to_string()),
            ("id".to_string(), note_id.to_string()),
            (
                XML_DATA_FIELD.to_string(),
                encode::encode_rows(NOTES_MODULE, &[note])?,
            ),
        ]);

        let url = constants::xml_url(&self.config.base_url, NOTES_MODULE, "updateRecords");
        let body = self.transport.post(&url, &params).await?;

        decode::check_success(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    const SUCCESS_XML: &str = r#"<response><result><message>Record(s) added successfully</message><recorddetail><FL val="Id">177376000000142007</FL></recorddetail></result></response>"#;
    const ERROR_XML: &str =
        r#"<response><error><code>4401</code><message>mandatory value missing</message></error></response>"#;
    const LEADS_JSON: &str = r#"{"response":{"result":{"Leads":{"row":[{"FL":[{"val":"LEADID","content":"123"},{"val":"Company","content":"Acme"}]}]}}}}"#;
    const NOTES_JSON: &str = r#"{"response":{"result":{"Notes":{"row":[{"FL":[{"val":"Note Title","content":"hello"}]}]}}}}"#;

    struct MockTransport {
        body: String,
        calls: Arc<Mutex<Vec<(String, Params)>>>,
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn post(&self, url: &str, params: &Params) -> Result<String, ZohoError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), params.clone()));
            Ok(self.body.clone())
        }
    }

    fn mock_client(body: &str) -> (ZohoClient<MockTransport>, Arc<Mutex<Vec<(String, Params)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let transport = MockTransport {
            body: body.to_string(),
            calls: calls.clone(),
        };
        (
            ZohoClient::with_transport(ZohoConfig::default(), transport),
            calls,
        )
    }

    fn lead() -> Record {
        Record::from([("Company".to_string(), "Acme".to_string())])
    }

    #[tokio::test]
    async fn test_insert_records_request_and_answer() {
        let (client, calls) = mock_client(SUCCESS_XML);
        let inserted = client
            .insert_records("Leads", &[lead()], Params::new())
            .await
            .unwrap();

        assert_eq!(inserted.len(), 1);
        assert_eq!(
            inserted[0].get("Id").map(String::as_str),
            Some("177376000000142007")
        );

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(
            url,
            "https://crm.zoho.com/crm/private/xml/Leads/insertRecords"
        );
        assert_eq!(params.get("newFormat").map(String::as_str), Some("1"));
        assert_eq!(params.get("duplicateCheck").map(String::as_str), Some("2"));
        assert!(params.get("xmlData").unwrap().starts_with("<Leads>"));
    }

    #[tokio::test]
    async fn test_caller_params_override_fixed_flags() {
        let (client, calls) = mock_client(SUCCESS_XML);
        let extra = Params::from([("duplicateCheck".to_string(), "1".to_string())]);
        client
            .insert_records("Leads", &[lead()], extra)
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[0].1.get("duplicateCheck").map(String::as_str),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_update_records_request() {
        let (client, calls) = mock_client(SUCCESS_XML);
        client
            .update_records("Leads", "177376000000142007", &[lead()], Params::new())
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(
            url,
            "https://crm.zoho.com/crm/private/xml/Leads/updateRecords"
        );
        assert_eq!(
            params.get("id").map(String::as_str),
            Some("177376000000142007")
        );
        assert!(params.contains_key("xmlData"));
    }

    #[tokio::test]
    async fn test_delete_record_sends_no_payload() {
        let (client, calls) = mock_client(SUCCESS_XML);
        client
            .delete_record("Leads", "42", Params::new())
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(
            url,
            "https://crm.zoho.com/crm/private/xml/Leads/deleteRecords"
        );
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(!params.contains_key("xmlData"));
    }

    #[tokio::test]
    async fn test_get_records_selects_all_by_default() {
        let (client, calls) = mock_client(LEADS_JSON);
        let rows = client
            .get_records("Leads", &[], Params::new())
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Company").map(String::as_str), Some("Acme"));

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(url, "https://crm.zoho.com/crm/private/json/Leads/getRecords");
        assert_eq!(params.get("selectColumns").map(String::as_str), Some("All"));
        assert_eq!(params.get("newFormat").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn test_get_records_with_named_columns_and_filters() {
        let (client, calls) = mock_client(LEADS_JSON);
        let filters = Params::from([("fromIndex".to_string(), "1".to_string())]);
        client
            .get_records("Leads", &["First Name", "Company"], filters)
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        let params = &calls[0].1;
        assert_eq!(
            params.get("selectColumns").map(String::as_str),
            Some("Leads(First Name,Company)")
        );
        assert_eq!(params.get("fromIndex").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_get_notes_for_entity_request() {
        let (client, calls) = mock_client(NOTES_JSON);
        let notes = client.get_notes_for_entity("42").await.unwrap();
        assert_eq!(
            notes[0].get("Note Title").map(String::as_str),
            Some("hello")
        );

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(
            url,
            "https://crm.zoho.com/crm/private/json/Notes/getRelatedRecords"
        );
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert_eq!(params.get("parentModule").map(String::as_str), Some("All"));
    }

    #[tokio::test]
    async fn test_add_note_payload_fields() {
        let (client, calls) = mock_client(SUCCESS_XML);
        client.add_note("42", "title", "body text").await.unwrap();

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(
            url,
            "https://crm.zoho.com/crm/private/xml/Notes/insertRecords"
        );
        let xml = params.get("xmlData").unwrap();
        let doc = roxmltree::Document::parse(xml).unwrap();
        let field_for = |val: &str| {
            doc.descendants()
                .find(|n| n.has_tag_name("fl") && n.attribute("val") == Some(val))
                .and_then(|n| n.text())
                .map(str::to_string)
        };
        assert_eq!(field_for("entityId").as_deref(), Some("42"));
        assert_eq!(field_for("Note Title").as_deref(), Some("title"));
        assert_eq!(field_for("Note Content").as_deref(), Some("body text"));
    }

    #[tokio::test]
    async fn test_update_note_request() {
        let (client, calls) = mock_client(SUCCESS_XML);
        client.update_note("7", "new title", "new body").await.unwrap();

        let calls = calls.lock().unwrap();
        let (url, params) = &calls[0];
        assert_eq!(
            url,
            "https://crm.zoho.com/crm/private/xml/Notes/updateRecords"
        );
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
    }

    #[tokio::test]
    async fn test_vendor_error_propagates() {
        let (client, _calls) = mock_client(ERROR_XML);
        let err = client
            .update_records("Leads", "42", &[lead()], Params::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ZohoError::Vendor {
                message: "mandatory value missing".to_string()
            }
        );
    }
}
