//! XML codec for the XPath Filtering transform element
//!
//! Writes and reads the `XPath` parameter element (wrapped in its `Transform`
//! on output). Namespace declarations carried on the `XPath` element are the
//! namespace map of the parameters.

mod config;
mod de;
mod ser;
#[cfg(test)]
mod tests;

pub use config::XmlConfig;
pub use de::from_str;
pub use ser::to_string;
