//! CVC length checks for card entry.
//!
//! An entry field uses these to decide when the CVC is complete, for
//! example to move focus on to the next field.
//!
//! # Length Requirements
//!
//! - American Express: 4 digits (printed on front)
//! - All other cards: 3 digits (printed on back)
//!
//! Only the length is checked. Leading and trailing spaces and ASCII
//! control characters (everything up to `U+0020`) are ignored; other
//! Unicode whitespace such as `U+00A0` counts. Length is counted in
//! `char`s, so a character outside the Basic Multilingual Plane counts
//! as one. The characters themselves are never inspected.
//!
//! # Example
//!
//! ```
//! use card_entry::cvc::is_cvc_maximal_length;
//! use card_entry::CardBrand;
//!
//! assert!(is_cvc_maximal_length(CardBrand::AmericanExpress, Some("1234")));
//! assert!(is_cvc_maximal_length(CardBrand::Other, Some(" 123 ")));
//! assert!(!is_cvc_maximal_length(CardBrand::Other, None));
//! ```

use crate::CardBrand;

/// Returns the expected CVC length for a card brand.
///
/// - American Express: 4 digits
/// - All other brands: 3 digits
#[inline]
pub const fn cvc_length_for_brand(brand: CardBrand) -> usize {
    brand.max_cvc_length()
}

/// Strips spaces and ASCII control characters from both ends.
fn trim_cvc(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Returns true when `cvc` holds exactly as many characters as a complete
/// CVC for `brand`, ignoring surrounding spaces and control characters.
///
/// A missing value is never complete. Longer input is not complete either.
#[inline]
pub fn is_cvc_maximal_length(brand: CardBrand, cvc: Option<&str>) -> bool {
    match cvc {
        Some(text) => trim_cvc(text).chars().count() == cvc_length_for_brand(brand),
        None => false,
    }
}

/// Number of characters still missing before the CVC is complete.
///
/// ```
/// use card_entry::cvc::remaining_cvc_digits;
/// use card_entry::CardBrand;
///
/// assert_eq!(remaining_cvc_digits(CardBrand::AmericanExpress, Some("12")), 2);
/// assert_eq!(remaining_cvc_digits(CardBrand::Other, None), 3);
/// assert_eq!(remaining_cvc_digits(CardBrand::Other, Some("12345")), 0);
/// ```
pub fn remaining_cvc_digits(brand: CardBrand, cvc: Option<&str>) -> usize {
    let entered = cvc.map_or(0, |text| trim_cvc(text).chars().count());
    cvc_length_for_brand(brand).saturating_sub(entered)
}
