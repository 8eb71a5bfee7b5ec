//! # Unit Normalizer
//!
//! Maps a raw unit token to its canonical form. Full-width Latin letters are
//! folded before lookup and ASCII units match case-insensitively, so `ｇ`,
//! `グラム` and `G` all become `g`. Unknown units pass through as written.

use crate::lexicon::Lexicon;
use tracing::trace;

/// Normalize an optional unit token against `lexicon`
pub fn normalize_unit_with(lexicon: &Lexicon, unit: Option<&str>) -> Option<String> {
    let raw = unit?.trim();
    if raw.is_empty() {
        return None;
    }

    match lexicon.canonical_unit(raw) {
        Some(canonical) => {
            trace!("Unit '{}' -> '{}'", raw, canonical);
            Some(canonical.to_string())
        }
        None => {
            trace!("Unknown unit '{}', passing through", raw);
            Some(raw.to_string())
        }
    }
}

/// Normalize an optional unit token against the builtin lexicon
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::unit_normalizer::normalize_unit;
///
/// assert_eq!(normalize_unit(Some("大匙")).as_deref(), Some("大さじ"));
/// assert_eq!(normalize_unit(Some("ｇ")).as_deref(), Some("g"));
/// assert_eq!(normalize_unit(None), None);
/// ```
pub fn normalize_unit(unit: Option<&str>) -> Option<String> {
    normalize_unit_with(&Lexicon::builtin(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_unit() {
        assert_eq!(normalize_unit(None), None);
        assert_eq!(normalize_unit(Some("")), None);
        assert_eq!(normalize_unit(Some("  ")), None);
    }

    #[test]
    fn test_weight_synonyms() {
        for raw in ["g", "ｇ", "グラム", "gram", "grams", "G"] {
            assert_eq!(normalize_unit(Some(raw)).as_deref(), Some("g"), "{}", raw);
        }
        assert_eq!(normalize_unit(Some("ｋｇ")).as_deref(), Some("kg"));
    }

    #[test]
    fn test_volume_synonyms() {
        assert_eq!(normalize_unit(Some("cc")).as_deref(), Some("ml"));
        assert_eq!(normalize_unit(Some("mL")).as_deref(), Some("ml"));
        assert_eq!(normalize_unit(Some("リットル")).as_deref(), Some("L"));
    }

    #[test]
    fn test_spoon_synonyms() {
        assert_eq!(normalize_unit(Some("大匙")).as_deref(), Some("大さじ"));
        assert_eq!(normalize_unit(Some("大さじ")).as_deref(), Some("大さじ"));
        assert_eq!(normalize_unit(Some("小匙")).as_deref(), Some("小さじ"));
        assert_eq!(normalize_unit(Some("tbsp")).as_deref(), Some("大さじ"));
        assert_eq!(normalize_unit(Some("cups")).as_deref(), Some("カップ"));
    }

    #[test]
    fn test_count_units_are_canonical() {
        for unit in ["個", "本", "枚", "切れ", "片", "カップ"] {
            assert_eq!(normalize_unit(Some(unit)).as_deref(), Some(unit));
        }
        assert_eq!(normalize_unit(Some("コ")).as_deref(), Some("個"));
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        assert_eq!(normalize_unit(Some("個分")).as_deref(), Some("個分"));
        assert_eq!(normalize_unit(Some("furlong")).as_deref(), Some("furlong"));
    }
}
