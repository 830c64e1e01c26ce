//! Normalization algorithm selection.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::NormConfigError;
use crate::resolver::get_norm_type;

/// Normalization algorithm applied by a norm layer.
///
/// `AddBias` has no config literal: [`get_norm_type`] rejects `"add_bias"`,
/// so it can only be constructed in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum NormType {
    /// Mean/variance layer normalization.
    Layernorm,
    /// Root-mean-square normalization.
    Rmsnorm,
    /// Scaled ("alpha") layer normalization.
    Alphanorm,
    /// Bias addition only.
    AddBias,
    /// Unresolved algorithm; never produced by the resolver.
    InvalidType,
}

impl NormType {
    /// Canonical literal. For `AddBias` this is not accepted back by the resolver.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NormType::Layernorm => "layernorm",
            NormType::Rmsnorm => "rmsnorm",
            NormType::Alphanorm => "alphanorm",
            NormType::AddBias => "add_bias",
            NormType::InvalidType => "invalid_type",
        }
    }

    /// False only for the `InvalidType` sentinel.
    pub const fn is_valid(&self) -> bool {
        !matches!(self, NormType::InvalidType)
    }
}

impl fmt::Display for NormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormType {
    type Err = NormConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_norm_type(s)
    }
}

impl TryFrom<&str> for NormType {
    type Error = NormConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        get_norm_type(value)
    }
}

impl TryFrom<String> for NormType {
    type Error = NormConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        get_norm_type(&value)
    }
}

impl Serialize for NormType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
