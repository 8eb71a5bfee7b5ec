//! # Normalizer Integration Tests
//!
//! End-to-end checks of the public entry points: `normalize`,
//! `normalize_batch` and `to_dict`.

use ingredient_normalizer::{
    normalize, normalize_batch, normalize_name, parse_quantity, to_dict, IngredientNormalizer,
    Lexicon,
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_onion_fraction() {
    let record = normalize("玉ねぎ 1/2個");
    assert_eq!(record.name, normalize_name("玉ねぎ"));
    assert_eq!(record.name, "たまねぎ");
    assert_eq!(record.quantity, Some(dec("0.5")));
    assert_eq!(record.unit.as_deref(), Some("個"));
    assert_eq!(record.note, None);
    assert_eq!(record.original_text, "玉ねぎ 1/2個");
}

#[test]
fn test_soy_sauce_tablespoons() {
    let record = normalize("醤油 大さじ2");
    assert_eq!(record.quantity, Some(dec("2")));
    assert_eq!(record.unit.as_deref(), Some("大さじ"));

    // Ideographic space separator
    let record = normalize("醤油　大さじ2");
    assert_eq!(record.name, "しょうゆ");
    assert_eq!(record.quantity, Some(dec("2")));
    assert_eq!(record.unit.as_deref(), Some("大さじ"));
    assert_eq!(record.original_text, "醤油　大さじ2");
}

#[test]
fn test_salt_keyword() {
    let record = normalize("塩 少々");
    assert_eq!(record.quantity, None);
    assert_eq!(record.note.as_deref(), Some("少々"));

    let record = normalize("塩　少々");
    assert_eq!(record.name, "しお");
    assert_eq!(record.note.as_deref(), Some("少々"));
}

#[test]
fn test_empty_input() {
    let record = normalize("");
    assert_eq!(record.name, "");
    assert_eq!(record.quantity, None);
    assert_eq!(record.unit, None);
    assert_eq!(record.original_text, "");
}

#[test]
fn test_batch_scenario() {
    let lines = ["玉ねぎ 1/2個", "塩 少々"];
    let batch = normalize_batch(&lines);
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0], normalize("玉ねぎ 1/2個"));
    assert_eq!(batch[1], normalize("塩 少々"));
}

#[test]
fn test_batch_equivalence_and_order() {
    let lines: Vec<String> = vec![
        "豚肉 200g".to_string(),
        "".to_string(),
        "卵 1/0個".to_string(),
        "こしょう 適量".to_string(),
        "じゃが芋　３個".to_string(),
        "牛乳 カップ1と1/2".to_string(),
        "ﾁｰｽﾞ".to_string(),
    ];
    let batch = normalize_batch(&lines);
    assert_eq!(batch.len(), lines.len());
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(batch[i], normalize(line), "line {}", i);
        assert_eq!(batch[i].original_text, *line);
    }
}

#[test]
fn test_determinism() {
    for line in ["玉ねぎ 1/2個", "水 100〜200ml", "2 cups flour", "パセリ", "  "] {
        assert_eq!(normalize(line), normalize(line));
    }
}

#[test]
fn test_original_text_round_trip() {
    let lines = [
        "  玉ねぎ 1/2個  ",
        "醤油\u{3000}\u{3000}大さじ２",
        "・人参 1本",
        "\t塩 少々\n",
        "ＡＢＣ",
    ];
    for line in lines {
        assert_eq!(normalize(line).original_text, line);
    }
}

#[test]
fn test_quantity_properties() {
    assert_eq!(parse_quantity("1/2").quantity, Some(dec("0.5")));

    let two_thirds = parse_quantity("2/3").quantity.unwrap();
    assert!((two_thirds - dec("0.6666666666666666")).abs() < dec("0.000000000000001"));

    let range = parse_quantity("2-3");
    assert_eq!(range.quantity, Some(dec("2.5")));
    assert_eq!(range.note.as_deref(), Some("range: 2-3"));

    let range = parse_quantity("100〜200");
    assert_eq!(range.quantity, Some(dec("150")));
    assert_eq!(range.note.as_deref(), Some("range: 100-200"));

    let mixed = parse_quantity("1と1/2");
    assert_eq!(mixed.quantity, Some(dec("1.5")));
    assert_eq!(mixed.note, None);

    let keyword = parse_quantity("少々");
    assert_eq!(keyword.quantity, None);
    assert_eq!(keyword.note.as_deref(), Some("少々"));
}

#[test]
fn test_name_idempotence() {
    let lexicon = Lexicon::builtin();
    for canonical in lexicon.canonical_names() {
        assert_eq!(normalize_name(canonical), canonical);
    }
}

#[test]
fn test_to_dict_keys_and_values() {
    let dict = to_dict(&normalize("玉ねぎ 1/2個"));
    let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["name", "note", "original_text", "quantity", "unit"]);
    assert_eq!(dict["quantity"], Value::String("0.5".to_string()));
    assert_eq!(dict["note"], Value::Null);

    let dict = to_dict(&normalize("塩 少々"));
    assert_eq!(dict["quantity"], Value::Null);
    assert_eq!(dict["unit"], Value::Null);
    assert_eq!(dict["note"], Value::String("少々".to_string()));

    let dict = to_dict(&normalize(""));
    assert_eq!(dict["name"], Value::String(String::new()));
    assert_eq!(dict["quantity"], Value::Null);
}

#[test]
fn test_recipe_text() {
    let normalizer = IngredientNormalizer::new();
    let recipe = r#"
    材料（2人分）
    ・鶏もも肉　1枚
    ・長ねぎ　1/2本
    ・生姜　1かけ
    ・酒　大さじ1
    ・醤油　大さじ1と1/2
    ・ごま油　小さじ1
    ・塩　少々
    "#;

    let records = normalizer.normalize_text(recipe);
    assert_eq!(records.len(), 8);

    // Header line has no quantity and is kept as a name
    assert_eq!(records[0].quantity, None);

    assert_eq!(records[1].name, "とりももにく");
    assert_eq!(records[1].quantity, Some(dec("1")));
    assert_eq!(records[1].unit.as_deref(), Some("枚"));

    assert_eq!(records[2].name, "ながねぎ");
    assert_eq!(records[2].quantity, Some(dec("0.5")));
    assert_eq!(records[2].unit.as_deref(), Some("本"));

    assert_eq!(records[3].name, "しょうが");
    assert_eq!(records[3].unit.as_deref(), Some("かけ"));

    assert_eq!(records[5].name, "しょうゆ");
    assert_eq!(records[5].quantity, Some(dec("1.5")));
    assert_eq!(records[5].unit.as_deref(), Some("大さじ"));

    assert_eq!(records[6].name, "ごまあぶら");
    assert_eq!(records[6].unit.as_deref(), Some("小さじ"));

    assert_eq!(records[7].name, "しお");
    assert_eq!(records[7].note.as_deref(), Some("少々"));

    println!("✅ Normalized {} recipe lines", records.len());
}

#[test]
fn test_english_lines() {
    let record = normalize("2 cups flour");
    assert_eq!(record.name, "flour");
    assert_eq!(record.quantity, Some(dec("2")));
    assert_eq!(record.unit.as_deref(), Some("カップ"));

    let record = normalize("butter 50g");
    assert_eq!(record.name, "butter");
    assert_eq!(record.quantity, Some(dec("50")));
    assert_eq!(record.unit.as_deref(), Some("g"));

    let record = normalize("salt to taste");
    assert_eq!(record.name, "salt");
    assert_eq!(record.note.as_deref(), Some("to taste"));
}

#[test]
fn test_fullwidth_quantities_and_units() {
    let record = normalize("小麦粉　１００ｇ");
    assert_eq!(record.name, "こむぎこ");
    assert_eq!(record.quantity, Some(dec("100")));
    assert_eq!(record.unit.as_deref(), Some("g"));

    let record = normalize("卵　２～３個");
    assert_eq!(record.quantity, Some(dec("2.5")));
    assert_eq!(record.note.as_deref(), Some("range: 2-3"));
}

#[test]
fn test_prolonged_sound_mark_as_range_dash() {
    let record = normalize("卵 2ー3個");
    assert_eq!(record.name, "たまご");
    assert_eq!(record.quantity, Some(dec("2.5")));
    assert_eq!(record.unit.as_deref(), Some("個"));
    assert_eq!(record.note.as_deref(), Some("range: 2-3"));
}

#[test]
fn test_english_keyword_any_case() {
    let record = normalize("Salt To Taste");
    assert_eq!(record.name, "Salt");
    assert_eq!(record.quantity, None);
    assert_eq!(record.note.as_deref(), Some("To Taste"));

    let record = normalize("pepper AS NEEDED");
    assert_eq!(record.name, "pepper");
    assert!(record.is_keyword_quantity());
}

#[test]
fn test_quantity_glued_to_latin_name() {
    let record = normalize("butter200g");
    assert_eq!(record.name, "butter");
    assert_eq!(record.quantity, Some(dec("200")));
    assert_eq!(record.unit.as_deref(), Some("g"));
    assert_eq!(record.original_text, "butter200g");

    let record = normalize("ｂｕｔｔｅｒ２００ｇ");
    assert_eq!(record.name, "butter");
    assert_eq!(record.quantity, Some(dec("200")));
    assert_eq!(record.unit.as_deref(), Some("g"));

    let record = normalize("Vitamin B12");
    assert_eq!(record.name, "Vitamin B12");
    assert_eq!(record.quantity, None);
    assert_eq!(record.unit, None);
}

#[test]
fn test_unit_synonyms_in_lines() {
    assert_eq!(normalize("みりん 大匙1").unit.as_deref(), Some("大さじ"));
    assert_eq!(normalize("水 200cc").unit.as_deref(), Some("ml"));
    assert_eq!(normalize("豚肉 300グラム").unit.as_deref(), Some("g"));
}
