//! String-to-enum resolution for normalization settings.
//!
//! Matching is exact: no trimming, no case folding. Anything outside the
//! tables is reported as [`NormConfigError::UnsupportedValue`]; callers that
//! load configs at startup are expected to treat that as fatal.

use crate::error::{NormCategory, NormConfigError, Result};
use crate::layernorm_type::LayerNormType;
use crate::norm_type::NormType;

/// Accepted placement literals.
pub const LAYERNORM_TYPE_LITERALS: &[(&str, LayerNormType)] = &[
    ("pre_layernorm", LayerNormType::PreLayernorm),
    ("post_layernorm", LayerNormType::PostLayernorm),
];

/// Accepted algorithm literals. `NormType::AddBias` is deliberately absent.
pub const NORM_TYPE_LITERALS: &[(&str, NormType)] = &[
    ("layernorm", NormType::Layernorm),
    ("rmsnorm", NormType::Rmsnorm),
    ("alphanorm", NormType::Alphanorm),
];

fn lookup<T: Copy>(table: &[(&str, T)], category: NormCategory, value: &str) -> Result<T> {
    table
        .iter()
        .find(|(literal, _)| *literal == value)
        .map(|(_, variant)| *variant)
        .ok_or_else(|| NormConfigError::unsupported(category, value))
}

/// Resolve a placement literal such as `"pre_layernorm"`.
pub fn get_layernorm_type(layernorm_type_str: &str) -> Result<LayerNormType> {
    let resolved = lookup(
        LAYERNORM_TYPE_LITERALS,
        NormCategory::LayerNormType,
        layernorm_type_str,
    )?;
    tracing::debug!(input = layernorm_type_str, resolved = %resolved, "resolved layernorm type");
    Ok(resolved)
}

/// Resolve an algorithm literal such as `"rmsnorm"`.
pub fn get_norm_type(norm_type_str: &str) -> Result<NormType> {
    let resolved = lookup(NORM_TYPE_LITERALS, NormCategory::NormType, norm_type_str)?;
    tracing::debug!(input = norm_type_str, resolved = %resolved, "resolved norm type");
    Ok(resolved)
}
