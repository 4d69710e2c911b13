#![deny(rust_2018_idioms)]

pub mod aliases;
pub use aliases::Aliases;

pub mod field;
pub use field::resolve;

pub mod registry;

pub mod convert;
pub use convert::function::{build, convert, read_rows};

/// Parse amounts as they appear in invoice exports, like `$1,234.50`, ignoring all `$` and `,`.
///
/// Anything that still isn't a finite number afterwards counts as `0`.
pub fn parse_amount(raw: &str) -> f64 {
    raw.replace(['$', ','], "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or_default()
}
