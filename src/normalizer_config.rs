//! # Normalizer Configuration Module
//!
//! Configuration for [`IngredientNormalizer`](crate::normalizer::IngredientNormalizer),
//! loadable from environment variables.

use crate::normalizer_errors::{NormalizerError, NormalizerResult};
use std::env;
use std::path::PathBuf;

// Environment variables read by `NormalizerConfig::from_env`
pub const LEXICON_PATH_ENV: &str = "INGREDIENT_LEXICON_PATH";
pub const FRACTION_SCALE_ENV: &str = "INGREDIENT_FRACTION_SCALE";
pub const LEADING_QUANTITY_ENV: &str = "INGREDIENT_LEADING_QUANTITY";

/// Largest scale a decimal quantity can carry
pub const MAX_FRACTION_SCALE: u32 = 28;

/// Configuration structure for ingredient normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// JSON lexicon extension merged over the builtin tables
    pub lexicon_path: Option<PathBuf>,
    /// Decimal places kept for fractions; `None` keeps full precision
    pub fraction_scale: Option<u32>,
    /// Accept quantity-first lines such as "2 cups flour"
    pub leading_quantity: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            fraction_scale: None,
            leading_quantity: true,
        }
    }
}

impl NormalizerConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> NormalizerResult<()> {
        if let Some(scale) = self.fraction_scale {
            if scale > MAX_FRACTION_SCALE {
                return Err(NormalizerError::Config(format!(
                    "fraction_scale must be at most {}, got {}",
                    MAX_FRACTION_SCALE, scale
                )));
            }
        }

        if let Some(path) = &self.lexicon_path {
            if path.as_os_str().is_empty() {
                return Err(NormalizerError::Config(
                    "lexicon_path cannot be empty if provided".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Build a configuration from the process environment
    pub fn from_env() -> NormalizerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup (environment, map, ...)
    pub fn from_lookup<F>(lookup: F) -> NormalizerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(LEXICON_PATH_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                config.lexicon_path = Some(PathBuf::from(path));
            }
        }

        if let Some(scale) = lookup(FRACTION_SCALE_ENV) {
            let scale = scale.trim();
            config.fraction_scale = Some(scale.parse().map_err(|_| {
                NormalizerError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    FRACTION_SCALE_ENV, scale
                ))
            })?);
        }

        if let Some(flag) = lookup(LEADING_QUANTITY_ENV) {
            config.leading_quantity = parse_flag(LEADING_QUANTITY_ENV, &flag)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> NormalizerResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(NormalizerError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
