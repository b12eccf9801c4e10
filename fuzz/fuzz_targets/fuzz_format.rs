//! Fuzz target for card number grouping.
//!
//! Tests that grouping never panics on arbitrary input and never loses
//! or reorders characters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_entry::{format, CardBrand};

fuzz_target!(|data: &str| {
    let truncated: String = data.chars().take(16).collect();

    for brand in [CardBrand::AmericanExpress, CardBrand::Other] {
        let groups = format::separate_card_number_groups(data, brand);
        assert_eq!(groups.len(), brand.group_count());
        assert_eq!(groups.concat(), truncated, "Grouping should preserve input");

        let _ = format::format_for_brand(data, brand);
        let _ = format::format_for_brand_with_separator(data, brand, "-");
        let _ = format!("{:?}", groups);
    }
});
