//! # Ingredient Normalizer
//!
//! Turns free-form Japanese/English ingredient lines ("玉ねぎ 1/2個",
//! "醤油　大さじ2", "塩　少々") into structured records: canonical name,
//! exact decimal quantity, canonical unit and an optional note.

pub mod ingredient_model;
pub mod kana;
pub mod lexicon;
pub mod name_normalizer;
pub mod normalizer;
pub mod normalizer_config;
pub mod normalizer_errors;
pub mod quantity_parser;
pub mod shopping_list;
pub mod splitter;
pub mod unit_normalizer;

// Re-export types for easier access
pub use ingredient_model::{to_dict, NormalizedIngredient};
pub use lexicon::{Lexicon, LexiconExtension};
pub use name_normalizer::normalize_name;
pub use normalizer::{normalize, normalize_batch, IngredientNormalizer};
pub use normalizer_config::NormalizerConfig;
pub use normalizer_errors::{NormalizerError, NormalizerResult};
pub use quantity_parser::{parse_quantity, ParsedQuantity, QuantityForm};
pub use shopping_list::{ShoppingItem, ShoppingList};
pub use unit_normalizer::normalize_unit;
