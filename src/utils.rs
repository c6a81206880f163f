use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits of token amounts sent to the execution service
pub const TOKEN_AMOUNT_DP: u32 = 4;

// Token amount bought with `usd_amount` at `price_usd`, rounded to 4 decimals
pub fn quote_token_amount(usd_amount: f64, price_usd: f64) -> Option<Decimal> {
    if !price_usd.is_finite() || price_usd <= 0.0 {
        return None;
    }

    let usd = Decimal::from_f64(usd_amount)?;
    let price = Decimal::from_f64(price_usd)?;

    usd.checked_div(price)
        .map(|amount| amount.round_dp_with_strategy(TOKEN_AMOUNT_DP, RoundingStrategy::MidpointAwayFromZero))
}

// Wire form of a token amount, always with 4 fractional digits
pub fn format_token_amount(amount: Decimal) -> String {
    format!("{:.4}", amount)
}

// Format a USD value with two decimals
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

// Shorten an address to its first and last `chars` characters
pub fn truncate_address(address: &str, chars: usize) -> String {
    let count = address.chars().count();
    if count <= chars * 2 {
        return address.to_string();
    }

    let head: String = address.chars().take(chars).collect();
    let tail: String = address.chars().skip(count - chars).collect();

    format!("{}...{}", head, tail)
}
