//! # Splitter Module
//!
//! Separates a raw ingredient line into a name candidate and the trailing
//! quantity/unit candidates. The line is width-folded, trimmed and
//! whitespace-collapsed first, then matched against patterns built from the
//! lexicon, in this order (first match wins):
//!
//! 1. prefix measure: `醤油 大さじ2`, `牛乳 カップ1と1/2`, `塩 小さじ少々`
//! 2. suffix measure: `玉ねぎ 1/2個`, `豚肉200g`, `卵 2〜3個`
//! 3. keyword: `塩 少々`, `こしょう 適量`
//! 4. leading measure (optional): `2 cups flour`, `1/2 tsp salt`
//!
//! A line matching none of these is all name.

use crate::kana::{collapse_whitespace, fold_width};
use crate::lexicon::{Lexicon, PREFIX_UNITS};
use crate::normalizer_errors::NormalizerResult;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::trace;

/// Any quantity shape the quantity parser understands, most specific first
const QUANTITY_PATTERN: &str = r"\d+(?:\s*と\s*|\s+)\d+/\d+|\d+(?:\.\d+)?\s*[-~〜]\s*\d+(?:\.\d+)?|\d+/\d+|\d+(?:\.\d+)?";

/// Matches nothing; stands in for an empty alternation
const NEVER_MATCH: &str = r"[^\s\S]";

/// Bullet characters stripped from the start of a line
const LIST_MARKERS: &[char] = &['・', '●', '○', '◎', '■', '□', '◆', '◇', '★', '☆', '*', '-'];

/// Separators stripped from the end of a name candidate
const NAME_TRAILERS: &[char] = &[':', '、', ',', '…', '・', ' '];

/// Result of splitting one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitLine {
    /// Name candidate, possibly empty
    pub name: String,
    /// Quantity token (number, fraction, range, mixed number or keyword)
    pub quantity: Option<String>,
    /// Unit token exactly as written (after width folding)
    pub unit: Option<String>,
}

impl SplitLine {
    fn name_only(name: &str) -> Self {
        Self {
            name: clean_name(name),
            quantity: None,
            unit: None,
        }
    }

    fn from_captures(captures: &Captures<'_>) -> Self {
        let name = captures.name("name").map_or("", |m| m.as_str());
        Self {
            name: clean_name(name),
            quantity: captures.name("qty").map(|m| m.as_str().trim().to_string()),
            unit: captures
                .name("unit")
                .or_else(|| captures.name("raw_unit"))
                .map(|m| m.as_str().trim().to_string()),
        }
    }
}

/// Regexes compiled from a lexicon's unit and keyword tables
#[derive(Debug)]
pub struct SplitPatterns {
    prefix_measure: Regex,
    suffix_measure: Regex,
    keyword_measure: Regex,
    leading_measure: Regex,
}

impl SplitPatterns {
    /// Compile the split patterns for the given unit map and keyword list
    pub fn compile(units: &HashMap<String, String>, keywords: &[String]) -> NormalizerResult<Self> {
        let all_units = alternation(units.keys().map(String::as_str));
        let prefix_units = alternation(
            units
                .iter()
                .filter(|(_, canonical)| PREFIX_UNITS.contains(&canonical.as_str()))
                .map(|(raw, _)| raw.as_str()),
        );
        let keyword_units = alternation(keywords.iter().map(String::as_str));

        let prefix_measure = Regex::new(&format!(
            r"^(?P<name>.*?)\s*(?P<unit>(?i:{prefix_units}))\s*(?P<qty>{QUANTITY_PATTERN}|(?i:{keyword_units}))$"
        ))?;
        let suffix_measure = Regex::new(&format!(
            r"^(?P<name>.*?)(?P<sep>\s*)(?P<qty>{QUANTITY_PATTERN})(?:\s*(?P<unit>(?i:{all_units}))|(?P<raw_unit>[^\s\d()\[\]]+))?$"
        ))?;
        let keyword_measure = Regex::new(&format!(
            r"^(?P<name>.*?)(?P<sep>\s*)(?P<qty>(?i:{keyword_units}))$"
        ))?;
        let leading_measure = Regex::new(&format!(
            r"^(?P<qty>{QUANTITY_PATTERN})\s*(?:(?P<unit>(?i:{all_units}))\s+)?(?P<name>\S.*)$"
        ))?;

        Ok(Self {
            prefix_measure,
            suffix_measure,
            keyword_measure,
            leading_measure,
        })
    }
}

/// Escaped alternation, longest entries first so a shorter prefix never wins
fn alternation<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut items: Vec<&str> = items.filter(|s| !s.is_empty()).collect();
    if items.is_empty() {
        return NEVER_MATCH.to_string();
    }
    items.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    items.dedup();
    items
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<String>>()
        .join("|")
}

fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(LIST_MARKERS).trim_start()
}

fn clean_name(name: &str) -> String {
    name.trim().trim_end_matches(NAME_TRAILERS).trim().to_string()
}

/// A quantity glued to a Latin word belongs to the name: a bare number
/// ("B12") or a Latin keyword ("tomato taste"). A number followed by a unit
/// ("butter200g") is still a quantity.
fn glued_to_word(captures: &Captures<'_>) -> bool {
    let separated = captures.name("sep").is_some_and(|m| !m.as_str().is_empty());
    let has_unit = captures.name("unit").is_some() || captures.name("raw_unit").is_some();
    let name_end = captures
        .name("name")
        .and_then(|m| m.as_str().chars().last());
    let qty_start = captures
        .name("qty")
        .and_then(|m| m.as_str().chars().next());
    !separated
        && !has_unit
        && name_end.is_some_and(|c| c.is_ascii_alphanumeric())
        && qty_start.is_some_and(|c| c.is_ascii_alphanumeric())
}

/// Split `line` into name, quantity and unit candidates
///
/// `allow_leading` enables quantity-first lines such as `2 cups flour`.
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::lexicon::Lexicon;
/// use ingredient_normalizer::splitter::split_line;
///
/// let lexicon = Lexicon::builtin();
/// let split = split_line(&lexicon, "醤油　大さじ2", true);
/// assert_eq!(split.name, "醤油");
/// assert_eq!(split.quantity.as_deref(), Some("2"));
/// assert_eq!(split.unit.as_deref(), Some("大さじ"));
/// ```
pub fn split_line(lexicon: &Lexicon, line: &str, allow_leading: bool) -> SplitLine {
    let folded = collapse_whitespace(&fold_width(line));
    let body = strip_list_marker(&folded);
    if body.is_empty() {
        return SplitLine::default();
    }

    let patterns = lexicon.patterns();

    if let Some(captures) = patterns.prefix_measure.captures(body) {
        trace!("Prefix measure matched: '{}'", body);
        return SplitLine::from_captures(&captures);
    }

    if let Some(captures) = patterns.suffix_measure.captures(body) {
        if glued_to_word(&captures) {
            trace!("Suffix measure glued to a word, ignoring: '{}'", body);
        } else {
            trace!("Suffix measure matched: '{}'", body);
            return SplitLine::from_captures(&captures);
        }
    }

    if let Some(captures) = patterns.keyword_measure.captures(body) {
        if glued_to_word(&captures) {
            trace!("Keyword glued to a word, ignoring: '{}'", body);
        } else {
            trace!("Keyword measure matched: '{}'", body);
            return SplitLine::from_captures(&captures);
        }
    }

    if allow_leading {
        if let Some(captures) = patterns.leading_measure.captures(body) {
            trace!("Leading measure matched: '{}'", body);
            return SplitLine::from_captures(&captures);
        }
    }

    trace!("No quantity found, whole line is the name: '{}'", body);
    SplitLine::name_only(body)
}
