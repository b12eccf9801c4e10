//! Batch grouping of many card numbers at once.
//!
//! Useful when re-rendering a list of saved or imported numbers. Results
//! always come back in input order, with or without the `parallel`
//! feature.

use crate::format::{separate_card_number_groups, NumberGroups};
use crate::CardBrand;

/// Groups every number in `numbers` using the layout for `brand`.
///
/// # Example
///
/// ```
/// use card_entry::batch::segment_all;
/// use card_entry::CardBrand;
///
/// let groups = segment_all(&["42424242", "4"], CardBrand::Other);
/// assert_eq!(groups[0].join(" "), "4242 4242");
/// assert_eq!(groups[1].join(" "), "4");
/// ```
pub fn segment_all<S: AsRef<str>>(numbers: &[S], brand: CardBrand) -> Vec<NumberGroups> {
    numbers
        .iter()
        .map(|n| separate_card_number_groups(n.as_ref(), brand))
        .collect()
}

/// Groups numbers that each carry their own brand.
pub fn segment_each<S: AsRef<str>>(entries: &[(S, CardBrand)]) -> Vec<NumberGroups> {
    entries
        .iter()
        .map(|(n, brand)| separate_card_number_groups(n.as_ref(), *brand))
        .collect()
}

/// Groups numbers in parallel using rayon.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn segment_parallel<S: AsRef<str> + Sync>(
    numbers: &[S],
    brand: CardBrand,
) -> Vec<NumberGroups> {
    use rayon::prelude::*;
    numbers
        .par_iter()
        .map(|n| separate_card_number_groups(n.as_ref(), brand))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_all_preserves_order() {
        let numbers = vec!["4242424242424242", "", "42424"];
        let groups = segment_all(&numbers, CardBrand::Other);

        assert_eq!(groups.len(), 3);
        for (number, grouped) in numbers.iter().zip(&groups) {
            assert_eq!(grouped.concat(), *number);
        }
    }

    #[test]
    fn test_segment_all_owned_strings() {
        let numbers = vec![String::from("378282246310005")];
        let groups = segment_all(&numbers, CardBrand::AmericanExpress);
        assert_eq!(groups[0].join(" "), "3782 822463 10005");
    }

    #[test]
    fn test_segment_each() {
        let entries = [
            ("378282246310005", CardBrand::AmericanExpress),
            ("4242424242424242", CardBrand::Other),
        ];
        let groups = segment_each(&entries);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 4);
    }

    #[test]
    fn test_empty_batch() {
        let numbers: Vec<&str> = vec![];
        assert!(segment_all(&numbers, CardBrand::Other).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let numbers: Vec<String> = (0..200).map(|i| "4".repeat(i % 20)).collect();
        let sequential = segment_all(&numbers, CardBrand::Other);
        let parallel = segment_parallel(&numbers, CardBrand::Other);
        assert_eq!(sequential, parallel);
    }
}
