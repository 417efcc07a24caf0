use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::constants::{
    ALGORITHM_ATTRIBUTE, TRANSFORM_ELEMENT, XML_PREFIX, XMLDSIG_NAMESPACE, XMLNS_ATTRIBUTE,
    XPATH_ELEMENT,
};
use crate::error::{Error, Result};
use crate::transform::{TransformParameterSpec, XPathFilterParameterSpec};
use crate::xml::config::XmlConfig;

/// Serializes the parameters as a `Transform` element carrying the `XPath`
/// parameter element.
///
/// Each namespace mapping becomes an `xmlns:prefix` declaration on the
/// `XPath` element, in prefix order.
///
/// # Errors
/// `InvalidNamespace` if a prefix is not an NCName, is reserved (`xml`,
/// `xmlns`) or maps to an empty URI; `InvalidIndent` for a non-ASCII indent
/// character when pretty printing.
pub fn to_string(config: &XmlConfig, params: &XPathFilterParameterSpec) -> Result<String> {
    debug!(
        xpath = params.xpath(),
        namespaces = params.namespace_map().len(),
        "Serializing XPath filter transform"
    );

    if !config.prefix.is_empty() {
        check_prefix(&config.prefix)?;
    }
    for (prefix, uri) in params.namespace_map() {
        check_prefix(prefix)?;
        if uri.is_empty() {
            return Err(Error::InvalidNamespace(format!(
                "prefix {prefix:?} is bound to an empty URI"
            )));
        }
    }

    let mut output_buf = Vec::new();
    let mut writer = if config.pretty {
        let indent_char = config.indent.0;
        if !indent_char.is_ascii() {
            return Err(Error::InvalidIndent(indent_char));
        }
        Writer::new_with_indent(&mut output_buf, indent_char as u8, config.indent.1)
    } else {
        Writer::new(&mut output_buf)
    };

    let transform_name = config.qualified(TRANSFORM_ELEMENT);
    let xpath_name = config.qualified(XPATH_ELEMENT);
    let dsig_namespace = config.namespace_attribute();

    let mut transform = BytesStart::new(transform_name.as_str());
    transform.push_attribute((dsig_namespace.as_str(), XMLDSIG_NAMESPACE));
    transform.push_attribute((ALGORITHM_ATTRIBUTE, params.algorithm()));
    writer.write_event(Event::Start(transform))?;

    let mut xpath = BytesStart::new(xpath_name.as_str());
    for (prefix, uri) in params.namespace_map() {
        let declaration = format!("{XMLNS_ATTRIBUTE}:{prefix}");
        xpath.push_attribute((declaration.as_str(), uri.as_str()));
    }
    writer.write_event(Event::Start(xpath))?;
    writer.write_event(Event::Text(BytesText::new(params.xpath())))?;
    writer.write_event(Event::End(BytesEnd::new(xpath_name.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new(transform_name.as_str())))?;

    Ok(std::str::from_utf8(&output_buf)?.to_string())
}

/// Rejects prefixes that are not a non-colonized XML name or are reserved.
fn check_prefix(prefix: &str) -> Result<()> {
    let mut chars = prefix.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if !valid {
        return Err(Error::InvalidNamespace(format!(
            "prefix {prefix:?} is not a valid NCName"
        )));
    }
    if prefix == XML_PREFIX || prefix == XMLNS_ATTRIBUTE {
        return Err(Error::InvalidNamespace(format!(
            "prefix {prefix:?} is reserved"
        )));
    }
    Ok(())
}
