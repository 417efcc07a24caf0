use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TransformParameterSpec;
use crate::constants::XPATH_FILTER_ALGORITHM;
use crate::error::{Error, Result};

/// Parameters for the XPath Filtering transform.
///
/// Holds the XPath expression and the namespace prefix mappings used to
/// resolve prefixes inside it. The XML Schema definition of the parameters is
/// `<element name="XPath" type="string"/>`.
///
/// Instances never change after construction. The namespace map is built from
/// a copy of the caller's entries and is only handed out as a shared borrow,
/// so it cannot be modified through the accessor:
///
/// ```compile_fail
/// use dsig_transform_params::transform::XPathFilterParameterSpec;
///
/// let params = XPathFilterParameterSpec::with_namespaces("//a:x", [("a", "urn:a")]);
/// params.namespace_map().insert("b".to_string(), "urn:b".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XPathFilterParameterSpec {
    xpath: String,
    #[serde(rename = "namespaces", default)]
    namespace_map: BTreeMap<String, String>,
}

impl XPathFilterParameterSpec {
    /// Creates parameters with the given expression and no namespace mappings.
    pub fn new(xpath: impl Into<String>) -> Self {
        Self {
            xpath: xpath.into(),
            namespace_map: BTreeMap::new(),
        }
    }

    /// Creates parameters with the given expression and namespace mappings.
    ///
    /// Every entry is copied into storage owned by the new instance; the
    /// caller's container is not retained. For duplicate prefixes the last
    /// entry wins.
    pub fn with_namespaces<I, K, V>(xpath: impl Into<String>, namespace_map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            xpath: xpath.into(),
            namespace_map: namespace_map
                .into_iter()
                .map(|(prefix, uri)| (prefix.into(), uri.into()))
                .collect(),
        }
    }

    /// Creates parameters from an untyped expression value.
    ///
    /// # Errors
    /// `NullArgument` if the expression is absent or `null`, `TypeMismatch`
    /// if it is not a string.
    pub fn from_untyped(xpath: Option<&Value>) -> Result<Self> {
        let xpath = untyped_xpath(xpath)?;
        Ok(Self::new(xpath))
    }

    /// Creates parameters from an untyped expression and namespace map.
    ///
    /// The namespace map may be a JSON object or an array of `[prefix, uri]`
    /// pairs. All entries are copied before they are checked, and nothing is
    /// constructed unless every prefix and URI is a string.
    ///
    /// # Errors
    /// `NullArgument` if either argument is absent or `null`, `TypeMismatch`
    /// if the expression, the map shape, or any entry is not of string type.
    pub fn from_untyped_with_namespaces(
        xpath: Option<&Value>,
        namespace_map: Option<&Value>,
    ) -> Result<Self> {
        let xpath = untyped_xpath(xpath)?;
        let entries = untyped_entries(namespace_map)?;

        let mut copied = BTreeMap::new();
        for (prefix, uri) in entries {
            match (prefix, uri) {
                (Value::String(prefix), Value::String(uri)) => {
                    copied.insert(prefix, uri);
                }
                (prefix, uri) => {
                    return Err(Error::TypeMismatch(format!(
                        "namespace mapping {prefix} -> {uri} is not a string pair"
                    )));
                }
            }
        }

        Ok(Self {
            xpath,
            namespace_map: copied,
        })
    }

    /// Returns the XPath expression to be evaluated.
    pub fn xpath(&self) -> &str {
        &self.xpath
    }

    /// Returns the namespace prefix to URI mappings (may be empty).
    pub fn namespace_map(&self) -> &BTreeMap<String, String> {
        &self.namespace_map
    }
}

impl TransformParameterSpec for XPathFilterParameterSpec {
    fn algorithm(&self) -> &'static str {
        XPATH_FILTER_ALGORITHM
    }
}

fn untyped_xpath(xpath: Option<&Value>) -> Result<String> {
    match xpath {
        None | Some(Value::Null) => Err(Error::NullArgument("xpath")),
        Some(Value::String(xpath)) => Ok(xpath.clone()),
        Some(other) => Err(Error::TypeMismatch(format!(
            "xpath must be a string, found {other}"
        ))),
    }
}

fn untyped_entries(namespace_map: Option<&Value>) -> Result<Vec<(Value, Value)>> {
    match namespace_map {
        None | Some(Value::Null) => Err(Error::NullArgument("namespace_map")),
        Some(Value::Object(map)) => Ok(map
            .iter()
            .map(|(prefix, uri)| (Value::String(prefix.clone()), uri.clone()))
            .collect()),
        Some(Value::Array(pairs)) => pairs
            .iter()
            .map(|pair| match pair.as_array().map(Vec::as_slice) {
                Some([prefix, uri]) => Ok((prefix.clone(), uri.clone())),
                _ => Err(Error::TypeMismatch(format!(
                    "namespace map entry {pair} is not a [prefix, uri] pair"
                ))),
            })
            .collect(),
        Some(other) => Err(Error::TypeMismatch(format!(
            "namespace map must be a mapping, found {other}"
        ))),
    }
}
