//! # Character Folding Module
//!
//! Pure, total character-level transforms applied before any table lookup:
//!
//! - full-width ASCII (`０-９`, `ａ-ｚ`, `／`, `～`, ...) folds to half-width
//! - the ideographic space folds to an ASCII space
//! - vulgar fraction glyphs (`½`, `¾`, ...) expand to `N/M`
//! - katakana folds to hiragana by fixed code-point offset
//!
//! None of these depend on locale data; they operate on code points only.

/// First and last code points of the full-width ASCII block (`！` to `～`)
const FULLWIDTH_START: u32 = 0xFF01;
const FULLWIDTH_END: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Katakana `ァ` to `ヶ`, plus the katakana iteration marks `ヽ` `ヾ`
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
const KATAKANA_ITERATION_START: u32 = 0x30FD;
const KATAKANA_ITERATION_END: u32 = 0x30FE;
const KANA_OFFSET: u32 = 0x60;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Expansion of a vulgar fraction glyph, if `c` is one
fn vulgar_fraction(c: char) -> Option<&'static str> {
    let expanded = match c {
        '½' => "1/2",
        '⅓' => "1/3",
        '⅔' => "2/3",
        '¼' => "1/4",
        '¾' => "3/4",
        '⅕' => "1/5",
        '⅖' => "2/5",
        '⅗' => "3/5",
        '⅘' => "4/5",
        '⅙' => "1/6",
        '⅚' => "5/6",
        '⅛' => "1/8",
        '⅜' => "3/8",
        '⅝' => "5/8",
        '⅞' => "7/8",
        _ => return None,
    };
    Some(expanded)
}

/// Fold a single full-width ASCII character to its half-width counterpart
pub fn fold_fullwidth_char(c: char) -> char {
    let code = c as u32;
    if (FULLWIDTH_START..=FULLWIDTH_END).contains(&code) {
        char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c)
    } else if c == IDEOGRAPHIC_SPACE {
        ' '
    } else {
        c
    }
}

const PROLONGED_SOUND_MARK: char = '\u{30FC}';

/// Fold full-width ASCII, dash variants and vulgar fractions to plain ASCII
///
/// A vulgar fraction directly after a digit becomes a space-separated mixed
/// number, so `1½` reads as `1 1/2`. The prolonged sound mark `ー` between two
/// digits is a range dash (`2ー3`); anywhere else it is kana and is kept.
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::kana::fold_width;
///
/// assert_eq!(fold_width("１／２個"), "1/2個");
/// assert_eq!(fold_width("1½"), "1 1/2");
/// assert_eq!(fold_width("100ｇ"), "100g");
/// assert_eq!(fold_width("2ー3個"), "2-3個");
/// assert_eq!(fold_width("バター"), "バター");
/// ```
pub fn fold_width(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(expanded) = vulgar_fraction(c) {
            if folded.ends_with(|prev: char| prev.is_ascii_digit()) {
                folded.push(' ');
            }
            folded.push_str(expanded);
            continue;
        }
        let c = match c {
            '\u{2212}' | '\u{2013}' | '\u{2010}' => '-',
            '\u{2044}' => '/',
            PROLONGED_SOUND_MARK
                if folded.ends_with(|prev: char| prev.is_ascii_digit())
                    && chars
                        .peek()
                        .is_some_and(|&next| fold_fullwidth_char(next).is_ascii_digit()) =>
            {
                '-'
            }
            other => fold_fullwidth_char(other),
        };
        folded.push(c);
    }
    folded
}

/// Convert every katakana code point to hiragana; everything else passes through
///
/// The prolonged sound mark `ー` is shared by both scripts and is left alone.
///
/// # Examples
///
/// ```rust
/// use ingredient_normalizer::kana::katakana_to_hiragana;
///
/// assert_eq!(katakana_to_hiragana("タマネギ"), "たまねぎ");
/// assert_eq!(katakana_to_hiragana("ベーコン"), "べーこん");
/// assert_eq!(katakana_to_hiragana("牛肉"), "牛肉");
/// ```
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars().map(katakana_char_to_hiragana).collect()
}

fn katakana_char_to_hiragana(c: char) -> char {
    let code = c as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&code)
        || (KATAKANA_ITERATION_START..=KATAKANA_ITERATION_END).contains(&code)
    {
        char::from_u32(code - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Whether `text` holds at least one code point `katakana_to_hiragana` would change
pub fn contains_katakana(text: &str) -> bool {
    text.chars().any(|c| katakana_char_to_hiragana(c) != c)
}

/// Trim and collapse runs of whitespace (including the ideographic space) to one space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}
