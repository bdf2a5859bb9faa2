//! Display text for the bet list.

use crate::bet::{round2, BetRecord, Numeric};
use crate::config::{CURRENCY_PREFIX, MISSING_VALUE, MULTIPLIER_PREFIX};

fn two_places(v: &Numeric) -> String {
    v.as_f64().map(round2).unwrap_or_else(|| MISSING_VALUE.to_string())
}

pub fn format_amount(v: &Numeric) -> String { format!("{} {}", CURRENCY_PREFIX, two_places(v)) }
pub fn format_multiplier(v: &Numeric) -> String { format!("{}{}", MULTIPLIER_PREFIX, two_places(v)) }
pub fn format_return(bet: &BetRecord) -> String {
    let shown = if bet.return_amount.is_empty() { MISSING_VALUE } else { bet.return_amount.as_str() };
    format!("{} {}", CURRENCY_PREFIX, shown)
}
