//! Card number grouping for display while the user types.
//!
//! A spaceless card number is split into the groups a card input field
//! shows between its separators. Partial numbers are grouped too, so the
//! field can re-render after every keystroke.
//!
//! # Layouts
//!
//! - **American Express**: 3 groups, `XXXX XXXXXX XXXXX`
//! - **Everything else**: 4 groups, `XXXX XXXX XXXX XXXX`
//!
//! Input longer than 16 characters is cut to 16 before grouping. The
//! characters are not checked, so anything that is not a digit is grouped
//! like a digit would be. Lengths are counted in `char`s: a character
//! outside the Basic Multilingual Plane counts as one and is never split.
//!
//! # Example
//!
//! ```
//! use card_entry::format::{format_for_brand, separate_card_number_groups};
//! use card_entry::CardBrand;
//!
//! let groups = separate_card_number_groups("42424", CardBrand::Other);
//! assert_eq!(groups.get(0), Some("4242"));
//! assert_eq!(groups.get(1), Some("4"));
//! assert_eq!(groups.get(2), None);
//!
//! assert_eq!(format_for_brand("378282246310005", CardBrand::AmericanExpress), "3782 822463 10005");
//! ```

use std::fmt;
use zeroize::Zeroize;

use crate::card::{CardBrand, MAX_SEGMENTED_LENGTH};

/// The display groups of a (possibly partial) card number.
///
/// Always holds exactly [`CardBrand::group_count`] slots. A slot is `None`
/// when the number is too short to reach it. Joining the filled slots in
/// order gives back the grouped input.
///
/// # Security
///
/// - Group contents are zeroed when the value is dropped
/// - `Debug` output shows group lengths only
#[derive(Clone, PartialEq, Eq)]
pub struct NumberGroups {
    slots: Vec<Option<String>>,
}

impl NumberGroups {
    /// Number of slots (3 for American Express, 4 otherwise).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a grouping has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the group in slot `index`, or `None` if the slot is unset
    /// or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// All slots, in display order.
    #[inline]
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Iterates over the filled slots, in display order.
    pub fn filled(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Returns true when every slot holds a group.
    ///
    /// This says nothing about whether the last group is full length.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Concatenates the filled groups, giving back the grouped input.
    pub fn concat(&self) -> String {
        self.filled().collect()
    }

    /// Joins the non-empty groups with `separator`.
    ///
    /// ```
    /// use card_entry::format::separate_card_number_groups;
    /// use card_entry::CardBrand;
    ///
    /// let groups = separate_card_number_groups("4242424242424242", CardBrand::Other);
    /// assert_eq!(groups.join("-"), "4242-4242-4242-4242");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        let mut result = String::with_capacity(MAX_SEGMENTED_LENGTH + self.len() * separator.len());
        for group in self.filled().filter(|g| !g.is_empty()) {
            if !result.is_empty() {
                result.push_str(separator);
            }
            result.push_str(group);
        }
        result
    }

    /// Consumes the grouping and returns the raw slots.
    pub fn into_slots(mut self) -> Vec<Option<String>> {
        std::mem::take(&mut self.slots)
    }
}

impl fmt::Debug for NumberGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Group lengths only, never the digits
        let lengths: Vec<Option<usize>> = self
            .slots
            .iter()
            .map(|slot| slot.as_ref().map(|g| g.chars().count()))
            .collect();
        f.debug_struct("NumberGroups")
            .field("slots", &lengths)
            .finish()
    }
}

impl Drop for NumberGroups {
    fn drop(&mut self) {
        self.slots.zeroize();
    }
}

/// Splits a spaceless card number into the display groups for `brand`.
///
/// Only the first 16 characters are used. The first slot that a partial
/// number does not fill completely receives the rest of the input, and
/// every later slot is left unset. An empty input gives an empty first
/// group.
///
/// # Example
///
/// ```
/// use card_entry::format::separate_card_number_groups;
/// use card_entry::CardBrand;
///
/// let amex = separate_card_number_groups("3782822", CardBrand::AmericanExpress);
/// assert_eq!(amex.get(0), Some("3782"));
/// assert_eq!(amex.get(1), Some("822"));
/// assert_eq!(amex.get(2), None);
///
/// let visa = separate_card_number_groups("4242424242424242", CardBrand::Other);
/// assert_eq!(visa.filled().collect::<Vec<_>>(), ["4242", "4242", "4242", "4242"]);
/// ```
pub fn separate_card_number_groups(raw: &str, brand: CardBrand) -> NumberGroups {
    let number: Vec<char> = raw.chars().take(MAX_SEGMENTED_LENGTH).collect();

    let slots = match brand {
        CardBrand::AmericanExpress => amex_groups(&number),
        CardBrand::Other => common_groups(&number),
    };

    NumberGroups { slots }
}

/// 4-6-5 layout. Which slot takes the tail depends only on the length.
fn amex_groups(number: &[char]) -> Vec<Option<String>> {
    let len = number.len();
    let group = |start: usize, end: usize| Some(number[start..end].iter().collect::<String>());

    match len {
        0..=4 => vec![group(0, len), None, None],
        5..=10 => vec![group(0, 4), group(4, len), None],
        _ => vec![group(0, 4), group(4, 10), group(10, len)],
    }
}

/// Groups of 4; the last started group takes whatever is left.
fn common_groups(number: &[char]) -> Vec<Option<String>> {
    let mut slots: Vec<Option<String>> = vec![None; CardBrand::Other.group_count()];

    if number.is_empty() {
        slots[0] = Some(String::new());
        return slots;
    }

    // At most 16 chars, so there are never more than 4 chunks
    for (slot, chunk) in slots.iter_mut().zip(number.chunks(4)) {
        *slot = Some(chunk.iter().collect());
    }

    slots
}

/// Formats a partial or complete card number for `brand`, separating
/// groups with a single space.
///
/// # Example
///
/// ```
/// use card_entry::format::format_for_brand;
/// use card_entry::CardBrand;
///
/// assert_eq!(format_for_brand("424242", CardBrand::Other), "4242 42");
/// assert_eq!(format_for_brand("37828224631", CardBrand::AmericanExpress), "3782 822463 1");
/// ```
pub fn format_for_brand(raw: &str, brand: CardBrand) -> String {
    format_for_brand_with_separator(raw, brand, " ")
}

/// Formats a card number for `brand` with a custom separator.
pub fn format_for_brand_with_separator(raw: &str, brand: CardBrand, separator: &str) -> String {
    separate_card_number_groups(raw, brand).join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(groups: &NumberGroups) -> Vec<Option<&str>> {
        (0..groups.len()).map(|i| groups.get(i)).collect()
    }

    #[test]
    fn test_amex_up_to_first_group() {
        let groups = separate_card_number_groups("3782", CardBrand::AmericanExpress);
        assert_eq!(slots(&groups), vec![Some("3782"), None, None]);

        let groups = separate_card_number_groups("37", CardBrand::AmericanExpress);
        assert_eq!(slots(&groups), vec![Some("37"), None, None]);
    }

    #[test]
    fn test_amex_second_group() {
        let groups = separate_card_number_groups("37828", CardBrand::AmericanExpress);
        assert_eq!(slots(&groups), vec![Some("3782"), Some("8"), None]);

        let groups = separate_card_number_groups("3782822463", CardBrand::AmericanExpress);
        assert_eq!(slots(&groups), vec![Some("3782"), Some("822463"), None]);
    }

    #[test]
    fn test_amex_full_number() {
        let groups = separate_card_number_groups("378282246310005", CardBrand::AmericanExpress);
        assert_eq!(slots(&groups), vec![Some("3782"), Some("822463"), Some("10005")]);
        assert!(groups.is_complete());
    }

    #[test]
    fn test_amex_sixteen_digits_keeps_long_tail() {
        let groups = separate_card_number_groups("3782822463100051", CardBrand::AmericanExpress);
        assert_eq!(groups.get(2), Some("100051"));
    }

    #[test]
    fn test_amex_empty() {
        let groups = separate_card_number_groups("", CardBrand::AmericanExpress);
        assert_eq!(slots(&groups), vec![Some(""), None, None]);
    }

    #[test]
    fn test_common_full_number() {
        let groups = separate_card_number_groups("4242424242424242", CardBrand::Other);
        assert_eq!(
            slots(&groups),
            vec![Some("4242"), Some("4242"), Some("4242"), Some("4242")]
        );
    }

    #[test]
    fn test_common_partial_numbers() {
        let groups = separate_card_number_groups("42424", CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some("4242"), Some("4"), None, None]);

        let groups = separate_card_number_groups("4242", CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some("4242"), None, None, None]);

        let groups = separate_card_number_groups("42424242", CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some("4242"), Some("4242"), None, None]);

        let groups = separate_card_number_groups("4242424242424", CardBrand::Other);
        assert_eq!(
            slots(&groups),
            vec![Some("4242"), Some("4242"), Some("4242"), Some("4")]
        );
    }

    #[test]
    fn test_common_fourteen_digits() {
        let groups = separate_card_number_groups("30569309025904", CardBrand::Other);
        assert_eq!(
            slots(&groups),
            vec![Some("3056"), Some("9309"), Some("0259"), Some("04")]
        );
    }

    #[test]
    fn test_common_empty() {
        let groups = separate_card_number_groups("", CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some(""), None, None, None]);
        assert_eq!(groups.join(" "), "");
    }

    #[test]
    fn test_truncates_to_sixteen() {
        let groups = separate_card_number_groups("42424242424242429999", CardBrand::Other);
        assert_eq!(groups.concat(), "4242424242424242");

        let groups = separate_card_number_groups("37828224631000599", CardBrand::AmericanExpress);
        assert_eq!(groups.concat(), "3782822463100059");
    }

    #[test]
    fn test_non_digits_pass_through() {
        let groups = separate_card_number_groups("ab cd-ef", CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some("ab c"), Some("d-ef"), None, None]);
    }

    #[test]
    fn test_multibyte_characters_counted_as_chars() {
        let groups = separate_card_number_groups("١٢٣٤٥", CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some("١٢٣٤"), Some("٥"), None, None]);
    }

    #[test]
    fn test_astral_characters_count_once() {
        let number = "\u{1F4B3}234\u{1F4B3}";
        let groups = separate_card_number_groups(number, CardBrand::Other);
        assert_eq!(slots(&groups), vec![Some("\u{1F4B3}234"), Some("\u{1F4B3}"), None, None]);
    }

    #[test]
    fn test_slot_count_per_brand() {
        for input in ["", "4", "4242", "424242424242424242"] {
            assert_eq!(separate_card_number_groups(input, CardBrand::AmericanExpress).len(), 3);
            assert_eq!(separate_card_number_groups(input, CardBrand::Other).len(), 4);
        }
    }

    #[test]
    fn test_format_for_brand() {
        assert_eq!(format_for_brand("4242424242424242", CardBrand::Other), "4242 4242 4242 4242");
        assert_eq!(format_for_brand("4242", CardBrand::Other), "4242");
        assert_eq!(format_for_brand("", CardBrand::Other), "");
        assert_eq!(
            format_for_brand("378282246310005", CardBrand::AmericanExpress),
            "3782 822463 10005"
        );
    }

    #[test]
    fn test_format_for_brand_with_separator() {
        assert_eq!(
            format_for_brand_with_separator("4242424242424242", CardBrand::Other, "-"),
            "4242-4242-4242-4242"
        );
        assert_eq!(
            format_for_brand_with_separator("378282246310005", CardBrand::AmericanExpress, " - "),
            "3782 - 822463 - 10005"
        );
    }

    #[test]
    fn test_filled_count_and_into_slots() {
        let groups = separate_card_number_groups("424242", CardBrand::Other);
        assert_eq!(groups.filled_count(), 2);
        assert!(!groups.is_complete());

        let raw = groups.into_slots();
        assert_eq!(raw, vec![Some("4242".to_string()), Some("42".to_string()), None, None]);
    }

    #[test]
    fn test_debug_hides_digits() {
        let groups = separate_card_number_groups("4242424242424242", CardBrand::Other);
        let debug = format!("{:?}", groups);
        assert!(!debug.contains("4242"));
        assert!(debug.contains("NumberGroups"));
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let first = separate_card_number_groups("3782822463", CardBrand::AmericanExpress);
        let second = separate_card_number_groups("3782822463", CardBrand::AmericanExpress);
        assert_eq!(first, second);
    }
}
