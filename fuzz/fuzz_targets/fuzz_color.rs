//! Fuzz target for color parsing and classification.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_entry::color::{self, PackedColor};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    value: u32,
    literal: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let packed = PackedColor(input.value);
    assert_eq!(color::is_color_dark(input.value), packed.is_dark());
    assert_eq!(color::is_color_transparent(input.value), packed.alpha() < 0x10);
    assert_eq!(packed.to_string().parse::<PackedColor>(), Ok(packed));

    // Should never panic
    let _ = input.literal.parse::<PackedColor>();
});
