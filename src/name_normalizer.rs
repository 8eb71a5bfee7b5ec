//! # Name Normalizer
//!
//! Maps an ingredient name to its canonical reading: exact lexicon lookup
//! first, then katakana→hiragana folding (looked up again, so `タマネギ`
//! variants written with stray katakana still resolve), and finally the
//! input unchanged. Unknown names are never dropped.

use crate::kana::{contains_katakana, katakana_to_hiragana};
use crate::lexicon::Lexicon;
use tracing::trace;

/// Normalize `name` against `lexicon`
pub fn normalize_name_with(lexicon: &Lexicon, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return String::new();
    }

    if let Some(canonical) = lexicon.canonical_name(name) {
        trace!("Name '{}' -> '{}' (lexicon)", name, canonical);
        return canonical.to_string();
    }

    if !contains_katakana(name) {
        return name.to_string();
    }

    let hiragana = katakana_to_hiragana(name);
    match lexicon.canonical_name(&hiragana) {
        Some(canonical) => {
            trace!("Name '{}' -> '{}' (lexicon after kana folding)", name, canonical);
            canonical.to_string()
        }
        None => {
            trace!("Name '{}' -> '{}' (kana folding)", name, hiragana);
            hiragana
        }
    }
}

/// Normalize `name` against the builtin lexicon
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::name_normalizer::normalize_name;
///
/// assert_eq!(normalize_name("玉ねぎ"), "たまねぎ");
/// assert_eq!(normalize_name("ベーコン"), "べーこん");
/// assert_eq!(normalize_name("truffe"), "truffe");
/// ```
pub fn normalize_name(name: &str) -> String {
    normalize_name_with(&Lexicon::builtin(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_variants() {
        assert_eq!(normalize_name("玉ねぎ"), "たまねぎ");
        assert_eq!(normalize_name("玉葱"), "たまねぎ");
        assert_eq!(normalize_name("人参"), "にんじん");
        assert_eq!(normalize_name("醤油"), "しょうゆ");
        assert_eq!(normalize_name("醬油"), "しょうゆ");
    }

    #[test]
    fn test_katakana_spellings() {
        assert_eq!(normalize_name("タマネギ"), "たまねぎ");
        assert_eq!(normalize_name("ニンジン"), "にんじん");
    }

    #[test]
    fn test_full_name_is_returned() {
        // Every character survives, not just the first
        assert_eq!(normalize_name("鶏もも肉"), "とりももにく");
        assert_eq!(normalize_name("ブロッコリー"), "ぶろっこりー");
        assert_eq!(normalize_name("ブロッコリー").chars().count(), 6);
    }

    #[test]
    fn test_katakana_fallback() {
        assert_eq!(normalize_name("ベーコン"), "べーこん");
        assert_eq!(normalize_name("豚バラ"), "豚ばら");
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(normalize_name("柚子胡椒"), "柚子胡椒");
        assert_eq!(normalize_name("flour"), "flour");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_idempotent_on_canonical_names() {
        let lexicon = Lexicon::builtin();
        for canonical in lexicon.canonical_names() {
            assert_eq!(normalize_name(canonical), canonical);
        }
    }

    #[test]
    fn test_idempotent_after_one_pass() {
        for raw in ["玉ねぎ", "タマネギ", "ベーコン", "柚子胡椒", "豚バラ肉", "ミルク"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }
}
