pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod transform;
pub mod xml;

pub use error::{Error, Result};
pub use transform::{ExcC14nParameterSpec, TransformParameterSpec, XPathFilterParameterSpec};
