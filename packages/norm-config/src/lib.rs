//! # Norm Config
//!
//! Typed normalization settings for transformer model configs: where the
//! norm is placed relative to each sublayer and which normalization
//! algorithm the kernels should run.
//!
//! Resolution is strict. Unrecognized literals come back as
//! [`NormConfigError::UnsupportedValue`]; the `norm-config` binary turns that
//! into a process exit, which is how a misconfigured deployment is meant to
//! fail.

pub mod config;
pub mod error;
pub mod layernorm_type;
pub mod norm_type;
pub mod resolver;

pub use config::NormConfig;
pub use error::{NormCategory, NormConfigError, Result};
pub use layernorm_type::LayerNormType;
pub use norm_type::NormType;
pub use resolver::{get_layernorm_type, get_norm_type};

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        LayerNormType, NormCategory, NormConfig, NormConfigError, NormType, get_layernorm_type,
        get_norm_type,
    };
}
