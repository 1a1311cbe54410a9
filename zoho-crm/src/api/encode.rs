//! Row/field XML request encoder
//!
//! Write operations ship their records as an XML document of the form
//! `<Leads><row no="1"><fl val="First Name">Jane</fl>...</row></Leads>`:
//! one `row` per record, numbered from 1 in input order, one `fl` per field.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::error::ZohoError;
use super::models::Record;

/// Encode a batch of records into the vendor XML document for `resource`.
///
/// Pure function of its inputs; field order within a row follows the
/// record's iteration order, which the service does not care about.
pub fn encode_rows(resource: &str, records: &[Record]) -> Result<String, ZohoError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Start(BytesStart::new(resource)))
        .map_err(xml_write_error)?;

    for (index, record) in records.iter().enumerate() {
        let mut row = BytesStart::new("row");
        row.push_attribute(("no", (index + 1).to_string().as_str()));
        writer
            .write_event(Event::Start(row))
            .map_err(xml_write_error)?;

        for (key, value) in record {
            let mut field = BytesStart::new("fl");
            field.push_attribute(("val", key.as_str()));
            writer
                .write_event(Event::Start(field))
                .map_err(xml_write_error)?;
            writer
                .write_event(Event::Text(BytesText::new(value)))
                .map_err(xml_write_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("fl")))
                .map_err(xml_write_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("row")))
            .map_err(xml_write_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(resource)))
        .map_err(xml_write_error)?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| ZohoError::parse(format!("encoded document is not UTF-8: {}", e)))
}

fn xml_write_error(e: std::io::Error) -> ZohoError {
    ZohoError::parse(format!("xml writer: {}", e))
}
