//! # Normalized Ingredient Data Model
//!
//! The output record of the normalizer and its plain key/value form.
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_normalizer::normalize;
//!
//! let onion = normalize("玉ねぎ 1/2個");
//! let dict = onion.to_dict();
//! assert_eq!(dict["name"], "たまねぎ");
//! assert_eq!(dict["quantity"], "0.5");
//! assert_eq!(dict["unit"], "個");
//! ```

use crate::quantity_parser::{is_range_note, scale_range_note};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

/// A fully normalized ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIngredient {
    /// Canonical ingredient reading (empty for empty input)
    pub name: String,

    /// Exact parsed quantity; absent for keyword or missing quantities
    pub quantity: Option<Decimal>,

    /// Canonical unit token
    pub unit: Option<String>,

    /// Keyword quantity ("少々") or range description ("range: 2-3")
    pub note: Option<String>,

    /// The input line, untouched
    pub original_text: String,
}

impl NormalizedIngredient {
    /// Record for a line with no recognizable content
    pub fn empty(original_text: &str) -> Self {
        Self {
            name: String::new(),
            quantity: None,
            unit: None,
            note: None,
            original_text: original_text.to_string(),
        }
    }

    /// Check if this ingredient has a numeric quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// Check if the quantity was given as a keyword such as "少々"
    pub fn is_keyword_quantity(&self) -> bool {
        self.quantity.is_none() && self.note.is_some()
    }

    /// Copy with the quantity multiplied by `multiplier`
    ///
    /// Range notes get their bounds scaled too ("range: 2-3" x2 → "range: 4-6").
    /// Keyword and missing quantities are left alone, as is `original_text`.
    /// A product that overflows leaves the record unscaled.
    pub fn scaled(&self, multiplier: Decimal) -> Self {
        let mut scaled = self.clone();
        let Some(quantity) = self.quantity else {
            return scaled;
        };

        match quantity.checked_mul(multiplier) {
            Some(product) => scaled.quantity = Some(product.normalize()),
            None => {
                warn!(
                    "Scaling {} by {} overflows, keeping '{}' unscaled",
                    quantity, multiplier, self.original_text
                );
                return scaled;
            }
        }

        if let Some(note) = self.note.as_deref().filter(|note| is_range_note(note)) {
            scaled.note = scale_range_note(note, multiplier);
            if scaled.note.is_none() {
                warn!(
                    "Scaling range '{}' by {} overflows, dropping the note",
                    note, multiplier
                );
            }
        }
        scaled
    }

    /// Plain key/value form with the quantity as a decimal string
    pub fn to_dict(&self) -> Map<String, Value> {
        let optional = |value: &Option<String>| match value {
            Some(v) => Value::String(v.clone()),
            None => Value::Null,
        };

        let mut dict = Map::new();
        dict.insert("name".to_string(), Value::String(self.name.clone()));
        dict.insert(
            "quantity".to_string(),
            match self.quantity {
                Some(q) => Value::String(q.normalize().to_string()),
                None => Value::Null,
            },
        );
        dict.insert("unit".to_string(), optional(&self.unit));
        dict.insert(
            "original_text".to_string(),
            Value::String(self.original_text.clone()),
        );
        dict.insert("note".to_string(), optional(&self.note));
        dict
    }
}

/// Serialize a record to its key/value form
pub fn to_dict(record: &NormalizedIngredient) -> Map<String, Value> {
    record.to_dict()
}

impl fmt::Display for NormalizedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(quantity) = self.quantity {
            write!(f, " {}", quantity.normalize())?;
        }
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        if let Some(note) = &self.note {
            write!(f, " ({})", note)?;
        }

        Ok(())
    }
}
