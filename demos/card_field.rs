//! Card entry field example.
//!
//! Simulates a card form reacting to keystrokes.
//!
//! Run with: `cargo run --example card_field`

use card_entry::color::{contrasting_text, PackedColor};
use card_entry::{cvc, format, CardBrand};

fn main() {
    println!("=== Card Entry Field ===\n");

    // -------------------------------------------------------------------------
    // Number grouping while typing
    // -------------------------------------------------------------------------
    println!("--- Typing a number ---\n");

    let entries = [
        ("378282246310005", CardBrand::AmericanExpress),
        ("4242424242424242", CardBrand::Other),
    ];

    for (number, brand) in entries {
        println!("  {}", brand);
        for len in [1, 4, 5, 10, 11, number.len()] {
            let typed = &number[..len];
            let groups = format::separate_card_number_groups(typed, brand);
            let shown: Vec<&str> = groups
                .slots()
                .iter()
                .map(|slot| slot.as_deref().unwrap_or("_"))
                .collect();
            println!("    {:>16} -> [{}]", typed, shown.join(", "));
        }
        println!(
            "    Display: {}",
            format::format_for_brand(number, brand)
        );
        println!();
    }

    // -------------------------------------------------------------------------
    // CVC focus hand-off
    // -------------------------------------------------------------------------
    println!("--- CVC field ---\n");

    for brand in [CardBrand::AmericanExpress, CardBrand::Other] {
        let mut typed = String::new();
        for digit in "1234".chars() {
            typed.push(digit);
            let done = cvc::is_cvc_maximal_length(brand, Some(typed.as_str()));
            println!(
                "  {:<16} {:<5} complete: {}",
                brand.name(),
                typed,
                if done { "yes (move focus)" } else { "no" }
            );
            if done {
                break;
            }
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Theming
    // -------------------------------------------------------------------------
    println!("--- Theme colors ---\n");

    let backgrounds = ["#121212", "#FAFAFA", "#2196F3", "#08FFFFFF"];

    for literal in backgrounds {
        match literal.parse::<PackedColor>() {
            Ok(bg) if bg.is_transparent() => {
                println!("  {}: transparent, keep default tint", bg);
            }
            Ok(bg) => {
                let tint = if bg.is_dark() { "dark" } else { "light" };
                println!("  {}: {} theme, text {}", bg, tint, contrasting_text(bg));
            }
            Err(e) => println!("  {}: {}", literal, e),
        }
    }
}
