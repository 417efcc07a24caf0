use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::PrefixDeclaration;
use tracing::debug;

use crate::constants::XPATH_ELEMENT;
use crate::error::{Error, Result};
use crate::transform::XPathFilterParameterSpec;

/// Parses XPath filter parameters from the first `XPath` element in `xml`.
///
/// The element is matched by local name, so any prefix is accepted. Only
/// prefixed `xmlns:*` declarations on the element itself are collected; the
/// default namespace has no meaning in an XPath 1.0 expression.
pub fn from_str(xml: &str) -> Result<XPathFilterParameterSpec> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) if is_xpath_element(&e) => {
                let namespace_map = namespace_declarations(&e)?;
                let element_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let xpath = read_expression(&mut reader, element_name)?;
                debug!(xpath = %xpath, namespaces = namespace_map.len(), "Parsed XPath element");
                return Ok(XPathFilterParameterSpec::with_namespaces(
                    xpath,
                    namespace_map,
                ));
            }
            Event::Empty(e) if is_xpath_element(&e) => {
                let namespace_map = namespace_declarations(&e)?;
                debug!(namespaces = namespace_map.len(), "Parsed empty XPath element");
                return Ok(XPathFilterParameterSpec::with_namespaces(
                    "",
                    namespace_map,
                ));
            }
            Event::Eof => return Err(Error::MissingElement(XPATH_ELEMENT)),
            _ => {}
        }
    }
}

fn is_xpath_element(start: &BytesStart<'_>) -> bool {
    start.local_name().as_ref() == XPATH_ELEMENT.as_bytes()
}

fn namespace_declarations(start: &BytesStart<'_>) -> Result<BTreeMap<String, String>> {
    let mut namespace_map = BTreeMap::new();

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if let Some(PrefixDeclaration::Named(prefix)) = attr.key.as_namespace_binding() {
            let prefix = std::str::from_utf8(prefix)?.to_string();
            let uri = attr.unescape_value()?.into_owned();
            namespace_map.insert(prefix, uri);
        }
    }

    Ok(namespace_map)
}

/// Collects text and CDATA content up to the closing tag of the element
/// whose start tag was just read. A document that ends first is ill-formed.
fn read_expression(reader: &mut Reader<&[u8]>, element_name: String) -> Result<String> {
    let mut expression = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Text(text) => expression.push_str(&text.unescape()?),
            Event::CData(cdata) => expression.push_str(std::str::from_utf8(&cdata)?),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(expression),
            Event::End(_) => depth -= 1,
            Event::Eof => {
                return Err(Error::Xml(quick_xml::Error::IllFormed(
                    IllFormedError::MissingEndTag(element_name),
                )));
            }
            _ => {}
        }
    }
}
