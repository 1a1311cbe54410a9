//! Response decoders for the XML and JSON answer shapes
//!
//! Every response is checked for the vendor `<error>` element before any
//! data extraction. Successful answers carry their payload either as
//! `result/recorddetail/FL` XML (writes) or as the JSON nesting
//! `response.result.<Resource>.row[].FL[]` (reads).

use serde_json::Value;

use super::error::ZohoError;
use super::models::Record;

/// Fail with the vendor message if the XML response carries an `<error>`
/// element. Must run before extracting anything else from the body.
pub fn check_success(body: &str) -> Result<(), ZohoError> {
    let doc = parse_xml(body)?;

    // <response ...><error><code>4401</code><message>...</message></error></response>
    for error in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("error"))
    {
        let message = error
            .children()
            .find(|n| n.has_tag_name("message"))
            .and_then(|n| n.text())
            .unwrap_or("unspecified error");
        return Err(ZohoError::Vendor {
            message: message.to_string(),
        });
    }

    Ok(())
}

/// Extract the records echoed back by an insert: one flat mapping per
/// `result/recorddetail`, keyed by each `FL`'s `val` attribute.
pub fn inserted_records(body: &str) -> Result<Vec<Record>, ZohoError> {
    let doc = parse_xml(body)?;

    let mut records = Vec::new();
    for result in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("result"))
    {
        for detail in result.children().filter(|n| n.has_tag_name("recorddetail")) {
            let mut record = Record::new();
            for field in detail.children().filter(|n| n.has_tag_name("FL")) {
                let val = field
                    .attribute("val")
                    .ok_or_else(|| ZohoError::parse("FL element without a val attribute"))?;
                record.insert(val.to_string(), field.text().unwrap_or("").to_string());
            }
            records.push(record);
        }
    }

    Ok(records)
}

/// Decode a JSON response body into flat records by walking the fixed
/// nesting `response.result.<resource>.row[].FL[]`. Any missing or
/// wrongly-shaped key is a structural error.
pub fn json_rows(body: &str, resource: &str) -> Result<Vec<Record>, ZohoError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| ZohoError::parse(format!("invalid json: {}", e)))?;

    let rows = data
        .get("response")
        .and_then(|v| v.get("result"))
        .and_then(|v| v.get(resource))
        .and_then(|v| v.get("row"))
        .ok_or_else(|| {
            ZohoError::parse(format!("missing response.result.{}.row in answer", resource))
        })?;
    let rows = rows
        .as_array()
        .ok_or_else(|| ZohoError::parse("row is not a list"))?;

    let mut output = Vec::with_capacity(rows.len());
    for row in rows {
        let cells = row
            .get("FL")
            .and_then(Value::as_array)
            .ok_or_else(|| ZohoError::parse("row without an FL list"))?;

        let mut record = Record::new();
        for cell in cells {
            let val = cell
                .get("val")
                .and_then(Value::as_str)
                .ok_or_else(|| ZohoError::parse("FL cell without a string val"))?;
            let content = cell
                .get("content")
                .and_then(Value::as_str)
                .ok_or_else(|| ZohoError::parse("FL cell without a string content"))?;
            record.insert(val.to_string(), content.to_string());
        }
        output.push(record);
    }

    Ok(output)
}

fn parse_xml(body: &str) -> Result<roxmltree::Document<'_>, ZohoError> {
    roxmltree::Document::parse(body).map_err(|e| ZohoError::parse(format!("invalid xml: {}", e)))
}
