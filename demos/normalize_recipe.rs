//! # Recipe Normalizer Example
//!
//! Normalizes a Japanese recipe's ingredient list, prints the structured
//! records, then builds a shopping list for a doubled recipe.

use ingredient_normalizer::{IngredientNormalizer, ShoppingList};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🍳 Ingredient Normalizer Example");
    println!("===============================\n");

    // Example 1: Normalize a recipe's ingredient list
    println!("📖 Example 1: 肉じゃが");
    println!("----------------------");

    let normalizer = IngredientNormalizer::new();
    let recipe = r#"
    ・牛肉　200g
    ・じゃが芋　3個
    ・玉ねぎ　1/2個
    ・人参　1本
    ・醤油　大さじ3
    ・砂糖　大さじ1と1/2
    ・みりん　大さじ2
    ・水　300〜400ml
    ・塩　少々
    "#;

    let records = normalizer.normalize_text(recipe);
    for (i, record) in records.iter().enumerate() {
        println!("  {}. {} → {}", i + 1, record.original_text.trim(), record);
    }

    println!("\n");

    // Example 2: Key/value form handed to an API layer
    println!("📦 Example 2: Dictionary Form");
    println!("-----------------------------");

    let onion = normalizer.normalize("玉ねぎ 1/2個");
    println!("{}", serde_json::to_string_pretty(&onion.to_dict())?);

    println!("\n");

    // Example 3: Shopping list for a doubled recipe
    println!("🛒 Example 3: Shopping List (x2)");
    println!("--------------------------------");

    let mut list = ShoppingList::new();
    list.add_recipe(&records, Decimal::from(2));
    list.add_recipe(&normalizer.normalize_batch(&["タマネギ 1個", "しょう油 小さじ1"]), Decimal::ONE);

    for item in list.items() {
        println!("  • {}", item);
    }

    Ok(())
}
