//! Fuzz target for CVC length checks.
//!
//! Tests that CVC functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_entry::{cvc, CardBrand};

fuzz_target!(|data: Option<&str>| {
    for brand in [CardBrand::AmericanExpress, CardBrand::Other] {
        let complete = cvc::is_cvc_maximal_length(brand, data);
        let remaining = cvc::remaining_cvc_digits(brand, data);
        if complete {
            assert_eq!(remaining, 0);
        }
    }

    if let Some(text) = data {
        let _ = text.parse::<CardBrand>();
    }
});
