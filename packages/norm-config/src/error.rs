//! Errors raised while resolving normalization settings.
use std::fmt;

use thiserror::Error;

/// Which enumeration a rejected literal was being resolved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormCategory {
    /// Placement of the norm relative to the sublayer.
    LayerNormType,
    /// Normalization algorithm.
    NormType,
}

impl NormCategory {
    /// Label used in diagnostics.
    pub const fn label(&self) -> &'static str {
        match self {
            NormCategory::LayerNormType => "Layernorm Type",
            NormCategory::NormType => "Norm Type",
        }
    }
}

impl fmt::Display for NormCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for normalization config resolution and loading.
#[derive(Debug, Error)]
pub enum NormConfigError {
    /// The literal does not name any resolvable variant of `category`.
    #[error("{category}: {value} not supported !")]
    UnsupportedValue {
        category: NormCategory,
        value: String,
    },
    /// A numeric or structural field is out of range.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NormConfigError {
    pub(crate) fn unsupported(category: NormCategory, value: impl Into<String>) -> Self {
        NormConfigError::UnsupportedValue {
            category,
            value: value.into(),
        }
    }

    /// True for the rejected-literal case, which callers treat as fatal.
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, NormConfigError::UnsupportedValue { .. })
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, NormConfigError>;
