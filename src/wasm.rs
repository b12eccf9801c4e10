//! WebAssembly bindings for card entry helpers.
//!
//! This module lets a browser-side card form call into card_entry.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { separate_card_number_groups, is_cvc_maximal_length, is_color_dark } from 'card_entry';
//!
//! await init();
//!
//! // Group the number as the user types
//! const groups = separate_card_number_groups("424242", "Visa");
//! // ["4242", "42", null, null]
//!
//! // Move focus once the CVC is complete
//! if (is_cvc_maximal_length("American Express", cvcInput.value)) {
//!     postalInput.focus();
//! }
//!
//! // Pick icon tint for the current theme
//! const tint = is_color_dark(0xFF1E1E1E) ? "light" : "dark";
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::CardBrand;

/// Brand names from JS forms. Anything that is not American Express,
/// including an empty name, uses the common layout.
fn parse_brand(brand: &str) -> CardBrand {
    brand.parse().unwrap_or(CardBrand::Other)
}

/// Splits a spaceless card number into display groups.
///
/// Unset groups are `null`.
///
/// # Example
/// ```javascript
/// separate_card_number_groups("37828224", "amex");  // ["3782", "8224", null]
/// ```
#[wasm_bindgen]
pub fn separate_card_number_groups(card_number: &str, brand: &str) -> js_sys::Array {
    let groups = crate::format::separate_card_number_groups(card_number, parse_brand(brand));
    let result = js_sys::Array::new();

    for slot in groups.slots() {
        match slot {
            Some(group) => result.push(&JsValue::from_str(group)),
            None => result.push(&JsValue::NULL),
        };
    }

    result
}

/// Formats a card number with spaces between groups.
///
/// # Example
/// ```javascript
/// format_card_number("4242424242424242", "visa");  // "4242 4242 4242 4242"
/// ```
#[wasm_bindgen]
pub fn format_card_number(card_number: &str, brand: &str) -> String {
    crate::format::format_for_brand(card_number, parse_brand(brand))
}

/// Checks whether the CVC has reached its full length for the brand.
///
/// `null` and `undefined` are never complete.
#[wasm_bindgen]
pub fn is_cvc_maximal_length(brand: &str, cvc: Option<String>) -> bool {
    crate::cvc::is_cvc_maximal_length(parse_brand(brand), cvc.as_deref())
}

/// Checks whether a packed ARGB color reads as dark.
#[wasm_bindgen]
pub fn is_color_dark(color: u32) -> bool {
    crate::color::is_color_dark(color)
}

/// Checks whether a packed ARGB color is too transparent to be seen.
#[wasm_bindgen]
pub fn is_color_transparent(color: u32) -> bool {
    crate::color::is_color_transparent(color)
}

/// Groups a batch of card numbers that share one brand.
///
/// Returns an array of group arrays. Entries that are not strings are skipped.
///
/// # Example
/// ```javascript
/// const results = separate_batch(["4242424242424242", "4242"], "visa");
/// results.forEach(groups => console.log(groups.filter(Boolean).join(" ")));
/// ```
#[wasm_bindgen]
pub fn separate_batch(card_numbers: js_sys::Array, brand: &str) -> js_sys::Array {
    let results = js_sys::Array::new();

    for card in card_numbers.iter() {
        if let Some(card_str) = card.as_string() {
            results.push(&JsValue::from(separate_card_number_groups(&card_str, brand)));
        }
    }

    results
}
