//! # card_entry
//!
//! Helpers behind a payment card entry form. Work in progress.
//!
//! ## Features
//!
//! - Brand-aware grouping of partial card numbers for display
//! - CVC completeness checks per brand
//! - Dark / transparent color heuristics for theming the form
//! - Multiple interfaces: library, CLI, WASM
//!
//! Nothing here checks that a card number is real. Every function is
//! pure and total: any input gives a result, and nothing panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_entry::{separate_card_number_groups, CardBrand};
//!
//! // Group a number as the user types it
//! let groups = separate_card_number_groups("378282246", CardBrand::AmericanExpress);
//! assert_eq!(groups.get(0), Some("3782"));
//! assert_eq!(groups.get(1), Some("82246"));
//! assert_eq!(groups.get(2), None);
//!
//! // Ready to render
//! assert_eq!(groups.join(" "), "3782 82246");
//! ```
//!
//! ## CVC Length
//!
//! ```rust
//! use card_entry::{is_cvc_maximal_length, CardBrand};
//!
//! assert!(is_cvc_maximal_length(CardBrand::AmericanExpress, Some("1234")));
//! assert!(!is_cvc_maximal_length(CardBrand::AmericanExpress, Some("123")));
//! assert!(is_cvc_maximal_length(CardBrand::Other, Some("  123  ")));
//! assert!(!is_cvc_maximal_length(CardBrand::Other, None));
//! ```
//!
//! ## Theme Colors
//!
//! ```rust
//! use card_entry::{is_color_dark, is_color_transparent};
//!
//! assert!(is_color_dark(0xFF000000));
//! assert!(!is_color_dark(0xFFFFFFFF));
//! assert!(is_color_transparent(0x0F000000));
//! assert!(!is_color_transparent(0x10000000));
//! ```
//!
//! ## Card Brands
//!
//! | Brand | Groups | CVC |
//! |-------|--------|-----|
//! | American Express | 4-6-5 | 4 |
//! | Other | 4-4-4-4 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize / Deserialize for brands and colors |
//! | `parallel` | Rayon-based batch grouping |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - Grouped card numbers are zeroed when dropped
//! - `Debug` on grouped numbers shows group lengths only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod color;
pub mod cvc;
pub mod format;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{
    BrandError, CardBrand, CVC_LENGTH_AMERICAN_EXPRESS, CVC_LENGTH_COMMON, MAX_SEGMENTED_LENGTH,
};
pub use color::{is_color_dark, is_color_transparent, ColorParseError, PackedColor};
pub use cvc::is_cvc_maximal_length;
pub use format::{separate_card_number_groups, NumberGroups};
