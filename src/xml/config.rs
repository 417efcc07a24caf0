use crate::constants::{DEFAULT_DSIG_PREFIX, XMLNS_ATTRIBUTE};

/// Configuration for XML serialization
#[derive(Debug, Clone)]
pub struct XmlConfig {
    pub pretty: bool,
    pub indent: (char, usize),
    pub prefix: String,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: (' ', 2),
            prefix: DEFAULT_DSIG_PREFIX.to_string(),
        }
    }
}

impl XmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set this flag to true to enable pretty printing. Default is false.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the indent character and size. Default is (' ', 2).
    pub fn indent(mut self, indent_char: char, indent_size: usize) -> Self {
        self.indent = (indent_char, indent_size);
        self
    }

    /// Set the prefix bound to the XML signature namespace. Default is "ds".
    /// An empty prefix declares it as the default namespace instead.
    pub fn prefix<S: ToString>(mut self, prefix: S) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub(super) fn qualified(&self, local_name: &str) -> String {
        if self.prefix.is_empty() {
            local_name.to_string()
        } else {
            format!("{}:{local_name}", self.prefix)
        }
    }

    pub(super) fn namespace_attribute(&self) -> String {
        if self.prefix.is_empty() {
            XMLNS_ATTRIBUTE.to_string()
        } else {
            format!("{XMLNS_ATTRIBUTE}:{}", self.prefix)
        }
    }
}
