//! Currency formatting for the export renderers.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// The display symbol prefixed to every formatted amount.
///
/// Currency localization is out of scope; the tracker shows a single symbol
/// everywhere.
pub const CURRENCY_SYMBOL: &str = "Rs.";

/// Format `amount` as a currency string with a thousands separator and two
/// decimal places, e.g. `Rs.1,234.50`.
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency(&format!("-{CURRENCY_SYMBOL}"))
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        format!("{CURRENCY_SYMBOL}0.00")
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
