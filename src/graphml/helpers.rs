use quick_xml::events::BytesStart;

use super::GraphMLError;

/// Get an unescaped attribute value from a start tag
pub(super) fn get_attribute(e: &BytesStart, name: &str) -> Result<Option<String>, GraphMLError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| GraphMLError::XmlError(quick_xml::Error::from(e)))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value()?.into_owned();
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Get an attribute that must be present
pub(super) fn require_attribute(
    e: &BytesStart,
    element: &'static str,
    attribute: &'static str,
    position: u64,
) -> Result<String, GraphMLError> {
    get_attribute(e, attribute)?.ok_or(GraphMLError::MissingAttribute {
        element,
        attribute,
        position,
    })
}
