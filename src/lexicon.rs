//! # Lexicon Module
//!
//! Lexical tables used by every normalization stage:
//!
//! - ingredient names: raw spelling (kanji, katakana, mixed) → canonical hiragana reading
//! - units: raw form or synonym → canonical unit token
//! - quantity keywords: tokens that carry no number ("少々", "適量", ...)
//!
//! The builtin tables are compiled once per process into [`BUILTIN_LEXICON`]
//! and are read-only afterwards. A JSON extension can be merged over them to
//! build a separate [`Lexicon`] instance; the builtin one is never mutated.
//!
//! ## Extension file format
//!
//! ```json
//! {
//!   "names": { "ズッキーニ": "ずっきーに" },
//!   "units": { "つかみ": "つかみ" },
//!   "keywords": ["少しだけ"]
//! }
//! ```

use crate::kana::fold_width;
use crate::normalizer_errors::{NormalizerError, NormalizerResult};
use crate::splitter::SplitPatterns;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Raw ingredient spelling → canonical reading
const BUILTIN_NAMES: &[(&str, &str)] = &[
    // Vegetables
    ("玉ねぎ", "たまねぎ"),
    ("玉葱", "たまねぎ"),
    ("玉ネギ", "たまねぎ"),
    ("タマネギ", "たまねぎ"),
    ("オニオン", "たまねぎ"),
    ("人参", "にんじん"),
    ("ニンジン", "にんじん"),
    ("じゃが芋", "じゃがいも"),
    ("ジャガイモ", "じゃがいも"),
    ("馬鈴薯", "じゃがいも"),
    ("葱", "ねぎ"),
    ("ネギ", "ねぎ"),
    ("長ねぎ", "ながねぎ"),
    ("長葱", "ながねぎ"),
    ("長ネギ", "ながねぎ"),
    ("白ねぎ", "ながねぎ"),
    ("大根", "だいこん"),
    ("ダイコン", "だいこん"),
    ("白菜", "はくさい"),
    ("ハクサイ", "はくさい"),
    ("キャベツ", "きゃべつ"),
    ("ほうれん草", "ほうれんそう"),
    ("ホウレンソウ", "ほうれんそう"),
    ("菠薐草", "ほうれんそう"),
    ("生姜", "しょうが"),
    ("ショウガ", "しょうが"),
    ("生薑", "しょうが"),
    ("大蒜", "にんにく"),
    ("ニンニク", "にんにく"),
    ("椎茸", "しいたけ"),
    ("シイタケ", "しいたけ"),
    ("胡瓜", "きゅうり"),
    ("キュウリ", "きゅうり"),
    ("茄子", "なす"),
    ("ナス", "なす"),
    ("トマト", "とまと"),
    ("ピーマン", "ぴーまん"),
    ("牛蒡", "ごぼう"),
    ("ゴボウ", "ごぼう"),
    ("蓮根", "れんこん"),
    ("レンコン", "れんこん"),
    ("南瓜", "かぼちゃ"),
    ("カボチャ", "かぼちゃ"),
    ("薩摩芋", "さつまいも"),
    ("さつま芋", "さつまいも"),
    ("サツマイモ", "さつまいも"),
    ("萌やし", "もやし"),
    ("モヤシ", "もやし"),
    // Meat, eggs, dairy
    ("豚肉", "ぶたにく"),
    ("豚バラ肉", "ぶたばらにく"),
    ("豚ばら肉", "ぶたばらにく"),
    ("牛肉", "ぎゅうにく"),
    ("鶏肉", "とりにく"),
    ("鳥肉", "とりにく"),
    ("とり肉", "とりにく"),
    ("鶏もも肉", "とりももにく"),
    ("鶏モモ肉", "とりももにく"),
    ("挽肉", "ひきにく"),
    ("挽き肉", "ひきにく"),
    ("ひき肉", "ひきにく"),
    ("卵", "たまご"),
    ("玉子", "たまご"),
    ("タマゴ", "たまご"),
    ("鶏卵", "たまご"),
    ("牛乳", "ぎゅうにゅう"),
    ("ミルク", "ぎゅうにゅう"),
    ("バター", "ばたー"),
    // Seasonings and staples
    ("醤油", "しょうゆ"),
    ("醬油", "しょうゆ"),
    ("しょう油", "しょうゆ"),
    ("ショウユ", "しょうゆ"),
    ("味醂", "みりん"),
    ("ミリン", "みりん"),
    ("酒", "さけ"),
    ("日本酒", "さけ"),
    ("料理酒", "りょうりしゅ"),
    ("砂糖", "さとう"),
    ("上白糖", "さとう"),
    ("塩", "しお"),
    ("食塩", "しお"),
    ("酢", "す"),
    ("米酢", "こめず"),
    ("味噌", "みそ"),
    ("ミソ", "みそ"),
    ("胡椒", "こしょう"),
    ("コショウ", "こしょう"),
    ("ごま油", "ごまあぶら"),
    ("胡麻油", "ごまあぶら"),
    ("ゴマ油", "ごまあぶら"),
    ("サラダ油", "さらだあぶら"),
    ("小麦粉", "こむぎこ"),
    ("薄力粉", "はくりきこ"),
    ("片栗粉", "かたくりこ"),
    ("出汁", "だし"),
    ("ダシ", "だし"),
    ("水", "みず"),
    ("米", "こめ"),
    ("お米", "こめ"),
    ("ご飯", "ごはん"),
    ("御飯", "ごはん"),
];

/// Raw unit form or synonym → canonical unit. Keys are stored width-folded.
const BUILTIN_UNITS: &[(&str, &str)] = &[
    // Weight
    ("g", "g"),
    ("gr", "g"),
    ("gram", "g"),
    ("grams", "g"),
    ("グラム", "g"),
    ("kg", "kg"),
    ("キログラム", "kg"),
    ("キロ", "kg"),
    ("mg", "mg"),
    ("ミリグラム", "mg"),
    // Volume
    ("ml", "ml"),
    ("cc", "ml"),
    ("ミリリットル", "ml"),
    ("l", "L"),
    ("リットル", "L"),
    // Cooking measures
    ("大さじ", "大さじ"),
    ("大匙", "大さじ"),
    ("大サジ", "大さじ"),
    ("おおさじ", "大さじ"),
    ("tbsp", "大さじ"),
    ("tablespoon", "大さじ"),
    ("tablespoons", "大さじ"),
    ("小さじ", "小さじ"),
    ("小匙", "小さじ"),
    ("小サジ", "小さじ"),
    ("こさじ", "小さじ"),
    ("tsp", "小さじ"),
    ("teaspoon", "小さじ"),
    ("teaspoons", "小さじ"),
    ("カップ", "カップ"),
    ("cup", "カップ"),
    ("cups", "カップ"),
    ("合", "合"),
    // Counts
    ("個", "個"),
    ("コ", "個"),
    ("ケ", "個"),
    ("箇", "個"),
    ("本", "本"),
    ("枚", "枚"),
    ("切れ", "切れ"),
    ("切", "切れ"),
    ("片", "片"),
    ("かけ", "かけ"),
    ("玉", "玉"),
    ("束", "束"),
    ("株", "株"),
    ("房", "房"),
    ("袋", "袋"),
    ("缶", "缶"),
    ("パック", "パック"),
    ("丁", "丁"),
    ("尾", "尾"),
    ("匹", "匹"),
    ("杯", "杯"),
    ("粒", "粒"),
    ("箱", "箱"),
    ("瓶", "瓶"),
    ("枝", "枝"),
    ("節", "節"),
];

/// Quantity tokens with no numeric value
const BUILTIN_KEYWORDS: &[&str] = &[
    "少々",
    "適量",
    "ひとつまみ",
    "一つまみ",
    "ひとつかみ",
    "少量",
    "適宜",
    "少し",
    "お好みで",
    "好みで",
    "to taste",
    "as needed",
];

/// Canonical units that are written before the number ("大さじ2", "カップ1/2")
pub const PREFIX_UNITS: &[&str] = &["大さじ", "小さじ", "カップ"];

lazy_static! {
    /// Process-wide builtin lexicon, compiled on first use
    pub static ref BUILTIN_LEXICON: Arc<Lexicon> = Arc::new(
        Lexicon::from_parts(builtin_names(), builtin_units(), builtin_keywords())
            .expect("Builtin lexicon patterns should be valid")
    );
}

fn builtin_names() -> HashMap<String, String> {
    BUILTIN_NAMES
        .iter()
        .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
        .collect()
}

fn builtin_units() -> HashMap<String, String> {
    BUILTIN_UNITS
        .iter()
        .map(|(raw, canonical)| (unit_key(raw), canonical.to_string()))
        .collect()
}

fn builtin_keywords() -> Vec<String> {
    BUILTIN_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Lookup key for a unit form: width-folded, ASCII lowercased
fn unit_key(raw: &str) -> String {
    fold_width(raw.trim()).to_ascii_lowercase()
}

/// Additional lexicon entries loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LexiconExtension {
    #[serde(default)]
    pub names: HashMap<String, String>,
    #[serde(default)]
    pub units: HashMap<String, String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl LexiconExtension {
    /// Reject empty entries and entries containing control characters
    pub fn validate(&self) -> NormalizerResult<()> {
        let check = |value: &str, category: &str| -> NormalizerResult<()> {
            if value.trim().is_empty() {
                return Err(NormalizerError::LexiconFormat(format!(
                    "{} entry cannot be empty",
                    category
                )));
            }
            if value.chars().any(|c| c.is_control()) {
                return Err(NormalizerError::LexiconFormat(format!(
                    "{} entry '{}' contains control characters",
                    category,
                    value.escape_debug()
                )));
            }
            Ok(())
        };

        for (raw, canonical) in &self.names {
            check(raw, "names")?;
            check(canonical, "names")?;
        }
        for (raw, canonical) in &self.units {
            check(raw, "units")?;
            check(canonical, "units")?;
        }
        for keyword in &self.keywords {
            check(keyword, "keywords")?;
        }
        Ok(())
    }
}

/// Immutable lexical tables plus the split patterns compiled from them
#[derive(Debug)]
pub struct Lexicon {
    names: HashMap<String, String>,
    units: HashMap<String, String>,
    keywords: Vec<String>,
    patterns: SplitPatterns,
}

impl Lexicon {
    /// Shared handle to the builtin lexicon
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN_LEXICON)
    }

    /// Build a lexicon from raw tables, compiling its split patterns
    pub fn from_parts(
        names: HashMap<String, String>,
        units: HashMap<String, String>,
        mut keywords: Vec<String>,
    ) -> NormalizerResult<Self> {
        let units: HashMap<String, String> = units
            .into_iter()
            .map(|(raw, canonical)| (unit_key(&raw), canonical))
            .collect();

        // Longest keyword first so alternations never stop at a shorter prefix
        keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        keywords.dedup();

        let patterns = SplitPatterns::compile(&units, &keywords)?;
        debug!(
            "Compiled lexicon: {} names, {} units, {} keywords",
            names.len(),
            units.len(),
            keywords.len()
        );

        Ok(Self {
            names,
            units,
            keywords,
            patterns,
        })
    }

    /// Builtin tables with `extension` merged over them; extension entries win
    pub fn with_extension(extension: LexiconExtension) -> NormalizerResult<Self> {
        extension.validate()?;

        let mut names = builtin_names();
        let mut units = builtin_units();
        let mut keywords = builtin_keywords();

        for (raw, canonical) in extension.names {
            if let Some(previous) = names.insert(raw.trim().to_string(), canonical.clone()) {
                if previous != canonical {
                    warn!(
                        "Lexicon extension overrides name '{}': '{}' -> '{}'",
                        raw, previous, canonical
                    );
                }
            }
        }
        for (raw, canonical) in extension.units {
            units.insert(unit_key(&raw), canonical.trim().to_string());
        }
        keywords.extend(extension.keywords.into_iter().map(|k| k.trim().to_string()));

        Self::from_parts(names, units, keywords)
    }

    /// Parse a JSON extension and merge it over the builtin tables
    pub fn from_json_str(json: &str) -> NormalizerResult<Self> {
        let extension: LexiconExtension = serde_json::from_str(json)?;
        Self::with_extension(extension)
    }

    /// Read a JSON extension file and merge it over the builtin tables
    pub fn from_json_file(path: impl AsRef<Path>) -> NormalizerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::LexiconIo(format!("{}: {}", path.display(), e))
        })?;
        let lexicon = Self::from_json_str(&content)?;
        info!(
            "Loaded lexicon extension from '{}' ({} names, {} units, {} keywords)",
            path.display(),
            lexicon.names.len(),
            lexicon.units.len(),
            lexicon.keywords.len()
        );
        Ok(lexicon)
    }

    /// Canonical reading for an exact raw ingredient spelling
    pub fn canonical_name(&self, raw: &str) -> Option<&str> {
        self.names.get(raw).map(String::as_str)
    }

    /// Canonical unit for a raw unit token (width-folded and case-insensitive for ASCII)
    pub fn canonical_unit(&self, raw: &str) -> Option<&str> {
        self.units.get(&unit_key(raw)).map(String::as_str)
    }

    /// Whether `token` is one of the quantity keywords, ignoring ASCII case
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(token))
    }

    /// Quantity keywords, longest first
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Every distinct canonical ingredient reading
    pub fn canonical_names(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.names.values().map(String::as_str).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Every distinct canonical unit
    pub fn canonical_units(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.units.values().map(String::as_str).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    pub(crate) fn patterns(&self) -> &SplitPatterns {
        &self.patterns
    }
}
