//! Parameters for XML signature transform algorithms
//!
//! Each parameter type is an immutable value built once and then shared
//! read-only with whatever transform engine consumes it.

mod exc_c14n;
mod xpath;

pub use exc_c14n::ExcC14nParameterSpec;
pub use xpath::XPathFilterParameterSpec;

/// Common role of every transform parameter type
pub trait TransformParameterSpec: std::fmt::Debug + Send + Sync {
    /// URI of the transform algorithm these parameters belong to
    fn algorithm(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EXCLUSIVE_C14N_ALGORITHM, XPATH_FILTER_ALGORITHM};

    #[test]
    fn test_parameter_types_share_transform_role() {
        let params: Vec<Box<dyn TransformParameterSpec>> = vec![
            Box::new(XPathFilterParameterSpec::new("self::text()")),
            Box::new(ExcC14nParameterSpec::with_prefixes(["ds"])),
        ];

        let algorithms: Vec<_> = params.iter().map(|p| p.algorithm()).collect();
        assert_eq!(
            algorithms,
            vec![XPATH_FILTER_ALGORITHM, EXCLUSIVE_C14N_ALGORITHM]
        );
    }
}
