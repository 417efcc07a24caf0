//! XML signature constants and algorithm URIs
//!
//! Centralized namespace, algorithm and element names used by the transform
//! parameter types and the XML codec.

/// XML namespace URIs
pub const XMLDSIG_NAMESPACE: &str = "http://www.w3.org/2000/09/xmldsig#";
pub const XMLNS_ATTRIBUTE: &str = "xmlns";
pub const XML_PREFIX: &str = "xml";

/// Transform algorithm URIs
pub const XPATH_FILTER_ALGORITHM: &str = "http://www.w3.org/TR/1999/REC-xpath-19991116";
pub const EXCLUSIVE_C14N_ALGORITHM: &str = "http://www.w3.org/2001/10/xml-exc-c14n#";

/// XML element names
pub const TRANSFORM_ELEMENT: &str = "Transform";
pub const XPATH_ELEMENT: &str = "XPath";

/// XML attribute names
pub const ALGORITHM_ATTRIBUTE: &str = "Algorithm";

/// Default prefix for the XML signature namespace
pub const DEFAULT_DSIG_PREFIX: &str = "ds";

/// Token naming the default namespace in an inclusive prefix list
pub const DEFAULT_NAMESPACE_TOKEN: &str = "#default";
