//! CLI tool for card entry formatting.
//!
//! # Usage
//!
//! ```bash
//! # Show the display groups of a (partial) card number
//! cardentry groups 37828224631 --brand amex
//!
//! # Format a card number
//! cardentry format 4242424242424242 --separator -
//!
//! # Check whether a CVC is complete
//! cardentry cvc 123 --brand other
//!
//! # Classify a theme color
//! cardentry color "#2196F3"
//! ```
//!
//! Set `RUST_LOG=cardentry=debug` for diagnostic output on stderr.

use card_entry::color::{contrasting_text, PackedColor};
use card_entry::{cvc, format, CardBrand, NumberGroups};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardentry")]
#[command(author, version, about = "Payment card entry formatting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a spaceless card number into display groups
    Groups {
        /// Card number, without spaces
        card_number: String,

        /// Card brand (affects grouping)
        #[arg(short, long, default_value = "other")]
        brand: BrandArg,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Format a card number with separators
    Format {
        /// Card number, without spaces
        card_number: String,

        /// Card brand (affects grouping)
        #[arg(short, long, default_value = "other")]
        brand: BrandArg,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Check whether a CVC has reached its full length
    Cvc {
        /// CVC as typed so far (omit for an empty field)
        cvc: Option<String>,

        /// Card brand (affects CVC length)
        #[arg(short, long, default_value = "other")]
        brand: BrandArg,
    },

    /// Classify a color as dark and/or transparent
    Color {
        /// Color as #RRGGBB or #AARRGGBB
        color: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BrandArg {
    Amex,
    Other,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Amex => CardBrand::AmericanExpress,
            BrandArg::Other => CardBrand::Other,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardentry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "parsed command");

    match cli.command {
        Commands::Groups {
            card_number,
            brand,
            output,
        } => {
            cmd_groups(&card_number, brand.into(), output);
        }
        Commands::Format {
            card_number,
            brand,
            separator,
        } => {
            cmd_format(&card_number, brand.into(), &separator);
        }
        Commands::Cvc { cvc: cvc_input, brand } => {
            cmd_cvc(cvc_input.as_deref(), brand.into());
        }
        Commands::Color { color, output } => {
            cmd_color(&color, output);
        }
    }
}

fn cmd_groups(card_number: &str, brand: CardBrand, output: OutputFormat) {
    if card_number.chars().count() > card_entry::MAX_SEGMENTED_LENGTH {
        tracing::warn!(
            max = card_entry::MAX_SEGMENTED_LENGTH,
            "card number truncated before grouping"
        );
    }

    let groups = format::separate_card_number_groups(card_number, brand);

    match output {
        OutputFormat::Text => {
            println!("Brand: {}", brand.name());
            for (i, slot) in groups.slots().iter().enumerate() {
                match slot {
                    Some(group) => println!("Group {}: {}", i + 1, group),
                    None => println!("Group {}: -", i + 1),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", groups_json(brand, &groups));
        }
    }
}

/// Renders the groups as a JSON object; unset slots are `null`.
fn groups_json(brand: CardBrand, groups: &NumberGroups) -> String {
    let value = serde_json::json!({
        "brand": brand.name(),
        "groups": groups.slots(),
    });
    // A map of strings and nulls always serializes
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

fn cmd_format(card_number: &str, brand: CardBrand, separator: &str) {
    let formatted = format::format_for_brand_with_separator(card_number, brand, separator);
    println!("{}", formatted);
}

fn cmd_cvc(cvc_input: Option<&str>, brand: CardBrand) {
    let complete = cvc::is_cvc_maximal_length(brand, cvc_input);
    let remaining = cvc::remaining_cvc_digits(brand, cvc_input);
    tracing::debug!(%brand, complete, remaining, "checked cvc");

    if complete {
        println!("Complete: yes");
        std::process::exit(0);
    } else {
        println!("Complete: no");
        if remaining > 0 {
            println!("Remaining: {} digits", remaining);
        } else {
            println!(
                "Too long: expected {} digits",
                cvc::cvc_length_for_brand(brand)
            );
        }
        std::process::exit(1);
    }
}

fn cmd_color(color_input: &str, output: OutputFormat) {
    let color: PackedColor = match color_input.parse() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(input = color_input, "rejected color literal");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let text = contrasting_text(color);

    match output {
        OutputFormat::Text => {
            println!("Color: {}", color);
            println!("Luminance: {:.3}", color.luminance());
            println!("Dark: {}", if color.is_dark() { "yes" } else { "no" });
            println!(
                "Transparent: {}",
                if color.is_transparent() { "yes" } else { "no" }
            );
            println!("Text Color: {}", text);
        }
        OutputFormat::Json => {
            println!("{{");
            println!("  \"color\": \"{}\",", color);
            println!("  \"luminance\": {:.3},", color.luminance());
            println!("  \"dark\": {},", color.is_dark());
            println!("  \"transparent\": {},", color.is_transparent());
            println!("  \"text_color\": \"{}\"", text);
            println!("}}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_groups(number: &str, brand: CardBrand) -> serde_json::Value {
        let groups = format::separate_card_number_groups(number, brand);
        serde_json::from_str(&groups_json(brand, &groups)).unwrap()
    }

    #[test]
    fn test_groups_json_shape() {
        let value = parsed_groups("42424", CardBrand::Other);
        assert_eq!(value["brand"], "Other");
        assert_eq!(
            value["groups"],
            serde_json::json!(["4242", "4", null, null])
        );
    }

    #[test]
    fn test_groups_json_escapes_control_characters() {
        let value = parsed_groups("42\u{1b}42\"\\", CardBrand::Other);
        assert_eq!(
            value["groups"],
            serde_json::json!(["42\u{1b}4", "2\"\\", null, null])
        );
    }

    #[test]
    fn test_groups_json_amex() {
        let value = parsed_groups("378282246310005", CardBrand::AmericanExpress);
        assert_eq!(value["brand"], "American Express");
        assert_eq!(
            value["groups"],
            serde_json::json!(["3782", "822463", "10005"])
        );
    }
}
