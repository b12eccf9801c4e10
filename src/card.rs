//! Card brand type shared by the grouping and CVC helpers.
//!
//! Only American Express uses its own layout (4-6-5 grouping, 4 digit CVC).
//! Every other network shares the 4-4-4-4 grouping and a 3 digit CVC, so
//! they collapse into a single `Other` variant.

use std::fmt;
use std::str::FromStr;

/// Maximum number of characters considered when grouping a card number.
///
/// Anything past this is dropped before grouping.
pub const MAX_SEGMENTED_LENGTH: usize = 16;

/// CVC length printed on American Express cards.
pub const CVC_LENGTH_AMERICAN_EXPRESS: usize = 4;

/// CVC length used by every other brand.
pub const CVC_LENGTH_COMMON: usize = 3;

/// Card brand as far as entry formatting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CardBrand {
    /// American Express - 3 groups (4-6-5), 4 digit CVC
    AmericanExpress,
    /// Visa, Mastercard, Discover, JCB, Diners Club, UnionPay... - 4 groups, 3 digit CVC
    Other,
}

impl CardBrand {
    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::Other => "Other",
        }
    }

    /// Number of display groups a card number is split into.
    #[inline]
    pub const fn group_count(&self) -> usize {
        self.group_sizes().len()
    }

    /// Nominal size of each display group.
    ///
    /// The last group of the common layout is a catch-all and may be shorter.
    #[inline]
    pub const fn group_sizes(&self) -> &'static [usize] {
        match self {
            Self::AmericanExpress => &[4, 6, 5],
            Self::Other => &[4, 4, 4, 4],
        }
    }

    /// Number of digits in a complete CVC for this brand.
    #[inline]
    pub const fn max_cvc_length(&self) -> usize {
        match self {
            Self::AmericanExpress => CVC_LENGTH_AMERICAN_EXPRESS,
            Self::Other => CVC_LENGTH_COMMON,
        }
    }

    /// Returns true for American Express.
    #[inline]
    pub const fn is_american_express(&self) -> bool {
        matches!(self, Self::AmericanExpress)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a brand name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandError {
    /// The brand name was empty or only whitespace.
    Empty,
}

impl fmt::Display for BrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card brand is empty"),
        }
    }
}

impl std::error::Error for BrandError {}

impl FromStr for CardBrand {
    type Err = BrandError;

    /// Parses a brand name as reported by a card form.
    ///
    /// Any non-empty name that isn't American Express is `Other`.
    ///
    /// ```
    /// use card_entry::CardBrand;
    ///
    /// assert_eq!("American Express".parse(), Ok(CardBrand::AmericanExpress));
    /// assert_eq!("amex".parse(), Ok(CardBrand::AmericanExpress));
    /// assert_eq!("Visa".parse(), Ok(CardBrand::Other));
    /// assert!("  ".parse::<CardBrand>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(BrandError::Empty);
        }

        let normalized: String = name
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "american express" | "amex" => Ok(Self::AmericanExpress),
            _ => Ok(Self::Other),
        }
    }
}
