//! # Quantity Parser
//!
//! Converts a quantity token into an exact decimal quantity and an optional
//! note. Format detection is an explicit, ordered classification into a
//! [`QuantityForm`]; the first shape that matches wins:
//!
//! 1. keyword (`少々`, `適量`) → no quantity, keyword kept as note
//! 2. range (`2-3`, `100〜200`) → midpoint, `"range: 2-3"` note
//! 3. mixed number (`1と1/2`, `1 1/2`) → whole + fraction
//! 4. fraction (`1/2`) → exact quotient
//! 5. decimal or integer literal (`2`, `1.5`)
//! 6. anything else → unrecognized, no quantity and no note
//!
//! Parsing never fails. Zero denominators, overflow and malformed literals
//! all degrade to the unrecognized result.

use crate::kana::{collapse_whitespace, fold_width};
use crate::lexicon::Lexicon;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, trace};

lazy_static! {
    static ref RANGE: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)\s*[-~〜]\s*(\d+(?:\.\d+)?)$").expect("Range pattern should be valid");
    static ref MIXED: Regex =
        Regex::new(r"^(\d+)(?:\s*と\s*|\s+)(\d+)/(\d+)$").expect("Mixed number pattern should be valid");
    static ref FRACTION: Regex =
        Regex::new(r"^(\d+)/(\d+)$").expect("Fraction pattern should be valid");
    static ref LITERAL: Regex =
        Regex::new(r"^\d+(?:\.\d+)?$").expect("Literal pattern should be valid");
}

/// Prefix of the note attached to range quantities
pub const RANGE_NOTE_PREFIX: &str = "range: ";

/// Whether `note` describes a range ("range: 2-3") rather than a keyword
pub fn is_range_note(note: &str) -> bool {
    note.starts_with(RANGE_NOTE_PREFIX)
}

/// Rewrite a range note with both bounds multiplied by `multiplier`
///
/// Returns `None` if `note` is not a range note or a bound overflows.
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::quantity_parser::scale_range_note;
/// use rust_decimal::Decimal;
///
/// assert_eq!(scale_range_note("range: 2-3", Decimal::from(2)).as_deref(), Some("range: 4-6"));
/// assert_eq!(scale_range_note("少々", Decimal::from(2)), None);
/// ```
pub fn scale_range_note(note: &str, multiplier: Decimal) -> Option<String> {
    let (low, high) = note.strip_prefix(RANGE_NOTE_PREFIX)?.split_once('-')?;
    let low = decimal(low)?.checked_mul(multiplier)?.normalize();
    let high = decimal(high)?.checked_mul(multiplier)?.normalize();
    Some(format!("{RANGE_NOTE_PREFIX}{low}-{high}"))
}

/// Shape of a quantity token, borrowed from the folded token text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityForm<'a> {
    /// Non-numeric keyword ("少々")
    Keyword(&'a str),
    /// Lower and upper bound literals
    Range { low: &'a str, high: &'a str },
    /// Whole part plus a fraction ("1と1/2")
    Mixed {
        whole: &'a str,
        numerator: &'a str,
        denominator: &'a str,
    },
    /// Plain fraction ("1/2")
    Fraction {
        numerator: &'a str,
        denominator: &'a str,
    },
    /// Decimal or integer literal
    Literal(&'a str),
    /// Nothing recognizable
    Unrecognized,
}

/// Outcome of parsing a quantity token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuantity {
    /// Exact numeric quantity, if the token had one
    pub quantity: Option<Decimal>,
    /// Keyword text or range description
    pub note: Option<String>,
}

impl ParsedQuantity {
    fn numeric(value: Decimal) -> Self {
        Self {
            quantity: Some(value),
            note: None,
        }
    }

    /// Neither a quantity nor a note was recognized
    pub fn is_unrecognized(&self) -> bool {
        self.quantity.is_none() && self.note.is_none()
    }

    /// The token was a keyword quantity
    pub fn is_keyword(&self) -> bool {
        self.quantity.is_none() && self.note.is_some()
    }
}

/// Classify an already width-folded token
pub fn classify<'a>(lexicon: &Lexicon, token: &'a str) -> QuantityForm<'a> {
    if lexicon.is_keyword(token) {
        return QuantityForm::Keyword(token);
    }
    if let Some(c) = RANGE.captures(token) {
        let (Some(low), Some(high)) = (c.get(1), c.get(2)) else {
            return QuantityForm::Unrecognized;
        };
        return QuantityForm::Range {
            low: low.as_str(),
            high: high.as_str(),
        };
    }
    if let Some(c) = MIXED.captures(token) {
        let (Some(whole), Some(numerator), Some(denominator)) = (c.get(1), c.get(2), c.get(3))
        else {
            return QuantityForm::Unrecognized;
        };
        return QuantityForm::Mixed {
            whole: whole.as_str(),
            numerator: numerator.as_str(),
            denominator: denominator.as_str(),
        };
    }
    if let Some(c) = FRACTION.captures(token) {
        let (Some(numerator), Some(denominator)) = (c.get(1), c.get(2)) else {
            return QuantityForm::Unrecognized;
        };
        return QuantityForm::Fraction {
            numerator: numerator.as_str(),
            denominator: denominator.as_str(),
        };
    }
    if LITERAL.is_match(token) {
        return QuantityForm::Literal(token);
    }
    QuantityForm::Unrecognized
}

fn decimal(literal: &str) -> Option<Decimal> {
    Decimal::from_str(literal).ok()
}

fn quotient(numerator: &str, denominator: &str, scale: Option<u32>) -> Option<Decimal> {
    let value = decimal(numerator)?.checked_div(decimal(denominator)?)?;
    Some(match scale {
        Some(dp) => value.round_dp(dp),
        None => value,
    })
}

/// Turn a classified form into its value; `None` means the form could not be evaluated
fn evaluate(form: QuantityForm<'_>, fraction_scale: Option<u32>) -> Option<ParsedQuantity> {
    match form {
        QuantityForm::Keyword(keyword) => Some(ParsedQuantity {
            quantity: None,
            note: Some(keyword.to_string()),
        }),
        QuantityForm::Range { low, high } => {
            let sum = decimal(low)?.checked_add(decimal(high)?)?;
            let midpoint = sum.checked_div(Decimal::TWO)?;
            Some(ParsedQuantity {
                quantity: Some(midpoint),
                note: Some(format!("{RANGE_NOTE_PREFIX}{low}-{high}")),
            })
        }
        QuantityForm::Mixed {
            whole,
            numerator,
            denominator,
        } => {
            let fraction = quotient(numerator, denominator, fraction_scale)?;
            Some(ParsedQuantity::numeric(decimal(whole)?.checked_add(fraction)?))
        }
        QuantityForm::Fraction {
            numerator,
            denominator,
        } => Some(ParsedQuantity::numeric(quotient(
            numerator,
            denominator,
            fraction_scale,
        )?)),
        QuantityForm::Literal(literal) => Some(ParsedQuantity::numeric(decimal(literal)?)),
        QuantityForm::Unrecognized => None,
    }
}

/// Parse a quantity token against `lexicon`
///
/// `fraction_scale` caps the decimal places kept for fractions; `None` keeps
/// full decimal precision.
pub fn parse_quantity_with(
    lexicon: &Lexicon,
    token: &str,
    fraction_scale: Option<u32>,
) -> ParsedQuantity {
    let folded = collapse_whitespace(&fold_width(token));
    let form = classify(lexicon, &folded);
    trace!("Classified quantity '{}' as {:?}", token, form);

    match evaluate(form, fraction_scale) {
        Some(parsed) => parsed,
        None => {
            if form != QuantityForm::Unrecognized {
                debug!("Quantity '{}' matched {:?} but could not be evaluated", token, form);
            }
            ParsedQuantity::default()
        }
    }
}

/// Parse a quantity token against the builtin lexicon at full precision
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::quantity_parser::parse_quantity;
/// use rust_decimal::Decimal;
///
/// let parsed = parse_quantity("2-3");
/// assert_eq!(parsed.quantity, Some(Decimal::new(25, 1)));
/// assert_eq!(parsed.note.as_deref(), Some("range: 2-3"));
///
/// let parsed = parse_quantity("少々");
/// assert_eq!(parsed.quantity, None);
/// assert_eq!(parsed.note.as_deref(), Some("少々"));
/// ```
pub fn parse_quantity(token: &str) -> ParsedQuantity {
    parse_quantity_with(&Lexicon::builtin(), token, None)
}
