//! # Ingredient Normalizer
//!
//! Composes the splitter, name normalizer, quantity parser and unit
//! normalizer into a single [`NormalizedIngredient`] per line.
//!
//! ## Features
//!
//! - Japanese and English ingredient lines ("玉ねぎ 1/2個", "醤油 大さじ2", "2 cups flour")
//! - Integers, decimals, fractions, mixed numbers, ranges and keyword quantities
//! - Full-width characters folded before parsing
//! - Batch and multi-line entry points
//!
//! An [`IngredientNormalizer`] holds only an immutable lexicon and its
//! configuration; one instance can be shared across threads without locking.

use crate::ingredient_model::NormalizedIngredient;
use crate::kana::{collapse_whitespace, fold_width};
use crate::lexicon::Lexicon;
use crate::name_normalizer::normalize_name_with;
use crate::normalizer_config::NormalizerConfig;
use crate::normalizer_errors::NormalizerResult;
use crate::quantity_parser::{parse_quantity_with, ParsedQuantity};
use crate::splitter::{split_line, SplitLine};
use crate::unit_normalizer::normalize_unit_with;
use lazy_static::lazy_static;
use std::sync::Arc;
use tracing::{debug, info, trace};

lazy_static! {
    static ref DEFAULT_NORMALIZER: IngredientNormalizer = IngredientNormalizer::new();
}

/// Normalizer over a shared, read-only lexicon
#[derive(Debug, Clone)]
pub struct IngredientNormalizer {
    lexicon: Arc<Lexicon>,
    config: NormalizerConfig,
}

impl IngredientNormalizer {
    /// Create a normalizer over the builtin lexicon with default configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_normalizer::IngredientNormalizer;
    ///
    /// let normalizer = IngredientNormalizer::new();
    /// let salt = normalizer.normalize("塩 少々");
    /// assert_eq!(salt.name, "しお");
    /// assert_eq!(salt.quantity, None);
    /// assert_eq!(salt.note.as_deref(), Some("少々"));
    /// ```
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            config: NormalizerConfig::default(),
        }
    }

    /// Create a normalizer from configuration, loading the lexicon extension if one is set
    pub fn with_config(config: NormalizerConfig) -> NormalizerResult<Self> {
        config.validate()?;

        let lexicon = match &config.lexicon_path {
            Some(path) => Arc::new(Lexicon::from_json_file(path)?),
            None => Lexicon::builtin(),
        };

        info!(
            "Creating IngredientNormalizer: lexicon={}, fraction_scale={:?}, leading_quantity={}",
            config
                .lexicon_path
                .as_ref()
                .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
            config.fraction_scale,
            config.leading_quantity
        );

        Ok(Self { lexicon, config })
    }

    /// Create a normalizer over an explicit lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: NormalizerConfig) -> NormalizerResult<Self> {
        config.validate()?;
        Ok(Self { lexicon, config })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Split a line into name, quantity and unit candidates
    pub fn split(&self, line: &str) -> SplitLine {
        split_line(&self.lexicon, line, self.config.leading_quantity)
    }

    /// Canonical reading of an ingredient name
    pub fn normalize_name(&self, name: &str) -> String {
        normalize_name_with(&self.lexicon, name)
    }

    /// Parse a quantity token
    pub fn parse_quantity(&self, token: &str) -> ParsedQuantity {
        parse_quantity_with(&self.lexicon, token, self.config.fraction_scale)
    }

    /// Canonical form of a unit token
    pub fn normalize_unit(&self, unit: Option<&str>) -> Option<String> {
        normalize_unit_with(&self.lexicon, unit)
    }

    /// Normalize one raw ingredient line
    ///
    /// Never fails: a quantity that matches a shape but cannot be evaluated
    /// (`1/0`) leaves the whole line as the name with no quantity or unit.
    pub fn normalize(&self, line: &str) -> NormalizedIngredient {
        let split = self.split(line);
        trace!("Split '{}' -> {:?}", line, split);

        if split.name.is_empty() && split.quantity.is_none() {
            return NormalizedIngredient::empty(line);
        }

        let parsed = match split.quantity.as_deref() {
            Some(token) => self.parse_quantity(token),
            None => ParsedQuantity::default(),
        };

        if split.quantity.is_some() && parsed.is_unrecognized() {
            debug!(
                "Unusable quantity '{}' in '{}', keeping the line as the name",
                split.quantity.as_deref().unwrap_or_default(),
                line
            );
            let whole = self.whole_line_name(line);
            return NormalizedIngredient {
                name: self.normalize_name(&whole),
                quantity: None,
                unit: None,
                note: None,
                original_text: line.to_string(),
            };
        }

        let record = NormalizedIngredient {
            name: self.normalize_name(&split.name),
            quantity: parsed.quantity,
            unit: self.normalize_unit(split.unit.as_deref()),
            note: parsed.note,
            original_text: line.to_string(),
        };
        debug!("Normalized '{}' -> {}", line, record);
        record
    }

    /// Best-effort name for a line whose quantity could not be used
    fn whole_line_name(&self, line: &str) -> String {
        collapse_whitespace(&fold_width(line))
    }

    /// Normalize each line independently, preserving order
    pub fn normalize_batch<S: AsRef<str>>(&self, lines: &[S]) -> Vec<NormalizedIngredient> {
        debug!("Normalizing batch of {} lines", lines.len());
        lines
            .iter()
            .map(|line| self.normalize(line.as_ref()))
            .collect()
    }

    /// Normalize every non-blank line of a multi-line text
    pub fn normalize_text(&self, text: &str) -> Vec<NormalizedIngredient> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.normalize(line))
            .collect()
    }
}

impl Default for IngredientNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize one line with the builtin lexicon
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::normalize;
/// use rust_decimal::Decimal;
///
/// let onion = normalize("玉ねぎ 1/2個");
/// assert_eq!(onion.name, "たまねぎ");
/// assert_eq!(onion.quantity, Some(Decimal::new(5, 1)));
/// assert_eq!(onion.unit.as_deref(), Some("個"));
/// assert_eq!(onion.original_text, "玉ねぎ 1/2個");
/// ```
pub fn normalize(line: &str) -> NormalizedIngredient {
    DEFAULT_NORMALIZER.normalize(line)
}

/// Normalize a batch of lines with the builtin lexicon
pub fn normalize_batch<S: AsRef<str>>(lines: &[S]) -> Vec<NormalizedIngredient> {
    DEFAULT_NORMALIZER.normalize_batch(lines)
}
