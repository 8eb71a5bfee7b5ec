//! # Shopping List Aggregation
//!
//! Collects normalized ingredients from one or more recipes, scaling each
//! recipe by a serving multiplier and merging entries that share the same
//! canonical name and unit. Quantities are summed exactly; keyword notes and
//! source lines are kept so nothing the recipe said is lost.
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_normalizer::{normalize_batch, ShoppingList};
//! use rust_decimal::Decimal;
//!
//! let curry = normalize_batch(&["玉ねぎ 1/2個", "塩 少々"]);
//! let soup = normalize_batch(&["タマネギ 1個"]);
//!
//! let mut list = ShoppingList::new();
//! list.add_recipe(&curry, Decimal::from(2));
//! list.add_recipe(&soup, Decimal::ONE);
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.items()[0].quantity, Some(Decimal::from(2)));
//! ```

use crate::ingredient_model::NormalizedIngredient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// One merged line of a shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Canonical ingredient reading
    pub name: String,
    /// Canonical unit shared by every merged entry
    pub unit: Option<String>,
    /// Sum of the scaled numeric quantities, if any entry had one
    pub quantity: Option<Decimal>,
    /// Distinct notes of the merged entries ("少々", "range: 2-3")
    pub notes: Vec<String>,
    /// Original recipe lines this item was built from
    pub sources: Vec<String>,
}

impl ShoppingItem {
    fn from_ingredient(ingredient: &NormalizedIngredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            quantity: None,
            notes: Vec::new(),
            sources: Vec::new(),
        }
    }

    fn merge(&mut self, ingredient: &NormalizedIngredient) {
        if let Some(quantity) = ingredient.quantity {
            self.quantity = Some(match self.quantity {
                Some(total) => total.checked_add(quantity).unwrap_or_else(|| {
                    warn!(
                        "Adding {} to {} overflows, '{}' is not counted in {}",
                        quantity, total, ingredient.original_text, self.name
                    );
                    total
                }),
                None => quantity,
            });
        }
        if let Some(note) = &ingredient.note {
            if !self.notes.contains(note) {
                self.notes.push(note.clone());
            }
        }
        self.sources.push(ingredient.original_text.clone());
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(quantity) = self.quantity {
            write!(f, " {}", quantity.normalize())?;
        }
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        if !self.notes.is_empty() {
            write!(f, " ({})", self.notes.join(", "))?;
        }
        Ok(())
    }
}

/// Insertion-ordered shopping list keyed by canonical name and unit
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    index: HashMap<(String, Option<String>), usize>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient scaled by `multiplier`
    ///
    /// Entries with an empty name (blank lines) are skipped.
    pub fn add(&mut self, ingredient: &NormalizedIngredient, multiplier: Decimal) {
        if ingredient.name.is_empty() {
            trace!("Skipping unnamed entry '{}'", ingredient.original_text);
            return;
        }

        let scaled = ingredient.scaled(multiplier);
        let key = (scaled.name.clone(), scaled.unit.clone());
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                self.items.push(ShoppingItem::from_ingredient(&scaled));
                self.index.insert(key, self.items.len() - 1);
                self.items.len() - 1
            }
        };
        self.items[position].merge(&scaled);
    }

    /// Add every ingredient of a recipe scaled by `multiplier`
    pub fn add_recipe(&mut self, ingredients: &[NormalizedIngredient], multiplier: Decimal) {
        debug!(
            "Adding {} ingredients to shopping list (x{})",
            ingredients.len(),
            multiplier
        );
        for ingredient in ingredients {
            self.add(ingredient, multiplier);
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by canonical name and unit
    pub fn get(&self, name: &str, unit: Option<&str>) -> Option<&ShoppingItem> {
        let key = (name.to_string(), unit.map(str::to_string));
        self.index.get(&key).map(|&position| &self.items[position])
    }
}
