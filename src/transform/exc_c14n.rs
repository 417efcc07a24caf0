use serde::{Deserialize, Serialize};

use super::TransformParameterSpec;
use crate::constants::{DEFAULT_NAMESPACE_TOKEN, EXCLUSIVE_C14N_ALGORITHM};

/// Parameters for Exclusive XML Canonicalization: the inclusive namespace
/// prefix list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcC14nParameterSpec {
    #[serde(default)]
    prefixes: Vec<String>,
}

impl ExcC14nParameterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the given prefixes; `#default` names the default namespace.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn includes_default_namespace(&self) -> bool {
        self.prefixes.iter().any(|p| p == DEFAULT_NAMESPACE_TOKEN)
    }
}

impl TransformParameterSpec for ExcC14nParameterSpec {
    fn algorithm(&self) -> &'static str {
        EXCLUSIVE_C14N_ALGORITHM
    }
}
