//! Where the normalization sits relative to a transformer sublayer.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::NormConfigError;
use crate::resolver::get_layernorm_type;

/// Placement of the normalization layer.
///
/// Only [`LayerNormType::PreLayernorm`] and [`LayerNormType::PostLayernorm`]
/// come out of [`get_layernorm_type`]. `InvalidType` marks a value that was
/// never resolved and is rejected by [`crate::NormConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum LayerNormType {
    /// Normalize the sublayer input.
    PreLayernorm,
    /// Normalize after the residual add.
    PostLayernorm,
    /// Unresolved placement; never produced by the resolver.
    InvalidType,
}

impl LayerNormType {
    /// Canonical config literal.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LayerNormType::PreLayernorm => "pre_layernorm",
            LayerNormType::PostLayernorm => "post_layernorm",
            LayerNormType::InvalidType => "invalid_type",
        }
    }

    /// False only for the `InvalidType` sentinel.
    pub const fn is_valid(&self) -> bool {
        !matches!(self, LayerNormType::InvalidType)
    }
}

impl fmt::Display for LayerNormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerNormType {
    type Err = NormConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_layernorm_type(s)
    }
}

impl TryFrom<&str> for LayerNormType {
    type Error = NormConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        get_layernorm_type(value)
    }
}

impl TryFrom<String> for LayerNormType {
    type Error = NormConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        get_layernorm_type(&value)
    }
}

impl Serialize for LayerNormType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
