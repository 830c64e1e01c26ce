//! Normalization section of a model configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NormCategory, NormConfigError, Result};
use crate::layernorm_type::LayerNormType;
use crate::norm_type::NormType;
use crate::resolver::{get_layernorm_type, get_norm_type};

fn default_layernorm_type() -> LayerNormType {
    LayerNormType::PreLayernorm
}

fn default_norm_type() -> NormType {
    NormType::Layernorm
}

fn default_layernorm_eps() -> f64 {
    1e-5
}

/// Resolved normalization settings for one model.
///
/// Built once when the model config is loaded and never mutated afterwards.
/// Keys not listed here are ignored so a full model `config.json` can be fed
/// in directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNormConfig")]
pub struct NormConfig {
    pub layernorm_type: LayerNormType,
    pub norm_type: NormType,
    pub layernorm_eps: f64,
    pub has_pre_decoder_layernorm: bool,
    pub has_post_decoder_layernorm: bool,
}

// Literals are kept as plain strings here so the resolvers, not serde,
// decide what is supported.
#[derive(Debug, Deserialize)]
struct RawNormConfig {
    #[serde(default)]
    layernorm_type: Option<String>,
    #[serde(default)]
    norm_type: Option<String>,
    #[serde(default = "default_layernorm_eps", alias = "layer_norm_eps")]
    layernorm_eps: f64,
    #[serde(default)]
    has_pre_decoder_layernorm: bool,
    #[serde(default)]
    has_post_decoder_layernorm: bool,
}

impl TryFrom<RawNormConfig> for NormConfig {
    type Error = NormConfigError;

    fn try_from(raw: RawNormConfig) -> Result<Self> {
        let layernorm_type = match raw.layernorm_type.as_deref() {
            Some(literal) => get_layernorm_type(literal)?,
            None => default_layernorm_type(),
        };
        let norm_type = match raw.norm_type.as_deref() {
            Some(literal) => get_norm_type(literal)?,
            None => default_norm_type(),
        };
        let config = Self {
            layernorm_type,
            norm_type,
            layernorm_eps: raw.layernorm_eps,
            has_pre_decoder_layernorm: raw.has_pre_decoder_layernorm,
            has_post_decoder_layernorm: raw.has_post_decoder_layernorm,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for NormConfig {
    fn default() -> Self {
        Self {
            layernorm_type: default_layernorm_type(),
            norm_type: default_norm_type(),
            layernorm_eps: default_layernorm_eps(),
            has_pre_decoder_layernorm: false,
            has_post_decoder_layernorm: false,
        }
    }
}

impl NormConfig {
    /// Parse and validate a JSON config.
    ///
    /// A bad placement or algorithm literal surfaces as
    /// [`NormConfigError::UnsupportedValue`] rather than a generic parse error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawNormConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading norm config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check values that bypassed the resolvers, e.g. built in code.
    pub fn validate(&self) -> Result<()> {
        if !self.layernorm_type.is_valid() {
            return Err(NormConfigError::unsupported(
                NormCategory::LayerNormType,
                self.layernorm_type.as_str(),
            ));
        }
        if !self.norm_type.is_valid() {
            return Err(NormConfigError::unsupported(
                NormCategory::NormType,
                self.norm_type.as_str(),
            ));
        }
        if !self.layernorm_eps.is_finite() || self.layernorm_eps <= 0.0 {
            return Err(NormConfigError::InvalidField {
                field: "layernorm_eps",
                reason: format!("must be a finite positive number, got {}", self.layernorm_eps),
            });
        }
        Ok(())
    }

    /// Pretty-printed JSON using the canonical literals.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
