use super::*;
use crate::error::Error;
use crate::transform::XPathFilterParameterSpec;

#[test]
fn test_serialize_transform() {
    let params = XPathFilterParameterSpec::with_namespaces(
        "ancestor-or-self::a:Body",
        [("a", "urn:a"), ("b", "urn:b")],
    );

    let xml = to_string(&XmlConfig::default(), &params).unwrap();

    assert_eq!(
        xml,
        concat!(
            r#"<ds:Transform xmlns:ds="http://www.w3.org/2000/09/xmldsig#" "#,
            r#"Algorithm="http://www.w3.org/TR/1999/REC-xpath-19991116">"#,
            r#"<ds:XPath xmlns:a="urn:a" xmlns:b="urn:b">ancestor-or-self::a:Body</ds:XPath>"#,
            r#"</ds:Transform>"#
        )
    );
}

#[test]
fn test_serialize_without_prefix() {
    let params = XPathFilterParameterSpec::new("self::text()");

    let xml = to_string(&XmlConfig::new().prefix(""), &params).unwrap();

    assert!(xml.starts_with(r#"<Transform xmlns="http://www.w3.org/2000/09/xmldsig#""#));
    assert!(xml.contains("<XPath>self::text()</XPath>"));
    assert!(xml.ends_with("</Transform>"));
}

#[test]
fn test_serialize_escapes_expression() {
    let params = XPathFilterParameterSpec::new("count(//x) < 2 and @a != \"b\"");

    let xml = to_string(&XmlConfig::default(), &params).unwrap();

    assert!(xml.contains("count(//x) &lt; 2"));
    assert_eq!(from_str(&xml).unwrap(), params);
}

#[test]
fn test_round_trip_pretty() {
    let params = XPathFilterParameterSpec::with_namespaces(
        "not(ancestor-or-self::ds:Signature)",
        [("ds", "http://www.w3.org/2000/09/xmldsig#")],
    );

    let xml = to_string(&XmlConfig::new().pretty(true).indent(' ', 4), &params).unwrap();
    assert!(xml.contains('\n'));

    let parsed = from_str(&xml).unwrap();
    assert_eq!(parsed, params);
}

#[test]
fn test_parse_collects_prefixed_declarations_only() {
    let xml = r#"<dsig:Transform xmlns:dsig="http://www.w3.org/2000/09/xmldsig#"
            Algorithm="http://www.w3.org/TR/1999/REC-xpath-19991116">
            <dsig:XPath xmlns="urn:default" xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">ancestor-or-self::soap:Body</dsig:XPath>
        </dsig:Transform>"#;

    let params = from_str(xml).unwrap();

    assert_eq!(params.xpath(), "ancestor-or-self::soap:Body");
    assert_eq!(params.namespace_map().len(), 1);
    assert_eq!(
        params.namespace_map()["soap"],
        "http://schemas.xmlsoap.org/soap/envelope/"
    );
}

#[test]
fn test_parse_cdata_and_entities() {
    let xml = r#"<XPath><![CDATA[count(//x) < 2]]> and @a = &quot;b&quot;</XPath>"#;

    let params = from_str(xml).unwrap();

    assert_eq!(params.xpath(), r#"count(//x) < 2 and @a = "b""#);
    assert!(params.namespace_map().is_empty());
}

#[test]
fn test_parse_empty_element() {
    let params = from_str(r#"<XPath xmlns:a="urn:a"/>"#).unwrap();

    assert_eq!(params.xpath(), "");
    assert_eq!(params.namespace_map()["a"], "urn:a");
}

#[test]
fn test_missing_xpath_element_fails() {
    let xml = r#"<ds:Transform xmlns:ds="http://www.w3.org/2000/09/xmldsig#"
        Algorithm="http://www.w3.org/2001/10/xml-exc-c14n#"/>"#;

    let result = from_str(xml);
    assert!(matches!(result, Err(Error::MissingElement("XPath"))));
}

#[test]
fn test_malformed_xml_fails() {
    let result = from_str("<ds:Transform><ds:XPath>self::text()</ds:Other></ds:Transform>");
    assert!(matches!(result, Err(Error::Xml(_))));
}

#[test]
fn test_empty_prefix_rejected() {
    let params = XPathFilterParameterSpec::with_namespaces("//x", [("", "urn:x")]);

    let result = to_string(&XmlConfig::default(), &params);
    assert!(matches!(result, Err(Error::InvalidNamespace(_))));
}

#[test]
fn test_empty_uri_rejected() {
    let params = XPathFilterParameterSpec::with_namespaces("//a:x", [("a", "")]);

    let result = to_string(&XmlConfig::default(), &params);
    assert!(matches!(result, Err(Error::InvalidNamespace(_))));
}

#[test]
fn test_reserved_and_malformed_prefixes_rejected() {
    for prefix in ["xml", "xmlns", "a:b", "1a", "a b"] {
        let params = XPathFilterParameterSpec::with_namespaces("//x", [(prefix, "urn:x")]);
        let result = to_string(&XmlConfig::default(), &params);
        assert!(
            matches!(result, Err(Error::InvalidNamespace(_))),
            "prefix {prefix:?} should be rejected: {result:?}"
        );
    }
}

#[test]
fn test_ncname_prefixes_accepted() {
    let params = XPathFilterParameterSpec::with_namespaces(
        "//_a:x | //soap-env.v1:y",
        [("_a", "urn:a"), ("soap-env.v1", "urn:soap")],
    );

    let xml = to_string(&XmlConfig::default(), &params).unwrap();
    assert_eq!(from_str(&xml).unwrap(), params);
}

#[test]
fn test_invalid_signature_prefix_rejected() {
    let params = XPathFilterParameterSpec::new("self::text()");

    let result = to_string(&XmlConfig::new().prefix("ds:sig"), &params);
    assert!(matches!(result, Err(Error::InvalidNamespace(_))));
}

#[test]
fn test_non_ascii_indent_rejected() {
    let params = XPathFilterParameterSpec::new("self::text()");
    let config = XmlConfig::new().pretty(true).indent('\u{3000}', 1);

    let result = to_string(&config, &params);
    assert!(matches!(result, Err(Error::InvalidIndent('\u{3000}'))));
}

#[test]
fn test_truncated_document_is_ill_formed() {
    let result = from_str("<ds:XPath>self::text()");

    match result {
        Err(Error::Xml(quick_xml::Error::IllFormed(
            quick_xml::errors::IllFormedError::MissingEndTag(name),
        ))) => assert_eq!(name, "ds:XPath"),
        other => panic!("expected missing end tag, got {other:?}"),
    }
}
