//! The bet record and the rule for its derived return amount.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An editable field of a bet. `returnAmount` is derived and has no entry here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetField {
    Title,
    Name,
    Amount,
    Multiplier,
}

impl BetField {
    pub fn all() -> &'static [Self] {
        &[Self::Title, Self::Name, Self::Amount, Self::Multiplier]
    }

    /// Fields whose change feeds into `return_amount`.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Amount | Self::Multiplier)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Name => "name",
            Self::Amount => "amount",
            Self::Multiplier => "multiplier",
        }
    }
}

impl fmt::Display for BetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stake or odds value: a parsed number after a submit, raw input text after an inline edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) if n.is_finite() => Some(*n),
            Numeric::Number(_) => None,
            Numeric::Text(s) => parse_decimal(s),
        }
    }

    /// Text to put back into an input box.
    pub fn to_input(&self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s.clone(),
        }
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Text(String::new())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub title: String,
    #[serde(rename = "name")]
    pub bettor_name: String,
    pub amount: Numeric,
    pub multiplier: Numeric,
    #[serde(rename = "returnAmount", default)]
    pub return_amount: String,
}

impl BetRecord {
    /// Builds a record from parsed values, deriving the return amount.
    pub fn new(title: impl Into<String>, bettor_name: impl Into<String>, amount: f64, multiplier: f64) -> Self {
        Self {
            title: title.into(),
            bettor_name: bettor_name.into(),
            amount: Numeric::Number(amount),
            multiplier: Numeric::Number(multiplier),
            return_amount: round2(amount * multiplier),
        }
    }

    /// Writes `value` into `field`. Touching amount or multiplier re-derives
    /// `return_amount` from the record's current pair; if either side does not
    /// parse, the previous return stands.
    pub fn set_field(&mut self, field: BetField, value: &str) {
        match field {
            BetField::Title => self.title = value.to_string(),
            BetField::Name => self.bettor_name = value.to_string(),
            BetField::Amount => self.amount = Numeric::Text(value.to_string()),
            BetField::Multiplier => self.multiplier = Numeric::Text(value.to_string()),
        }
        self.return_amount = compute_return(&self.return_amount, &self.amount, &self.multiplier, field);
    }
}

/// Return amount after `touched` changed. Only amount/multiplier edits
/// recompute, and only when both values parse.
pub fn compute_return(prev_return: &str, amount: &Numeric, multiplier: &Numeric, touched: BetField) -> String {
    if !touched.is_numeric() {
        return prev_return.to_string();
    }
    match (amount.as_f64(), multiplier.as_f64()) {
        (Some(a), Some(m)) => round2(a * m),
        _ => prev_return.to_string(),
    }
}

/// Two-decimal fixed-point text. Rounds the exact binary value, with ties
/// going away from zero (`2.125` -> `"2.13"`, `-2.125` -> `"-2.13"`).
pub fn round2(v: f64) -> String {
    match Decimal::from_f64_retain(v) {
        Some(d) => format!("{:.2}", d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)),
        // non-finite, or beyond Decimal's range
        None => format!("{:.2}", v),
    }
}

/// Lenient decimal parse for form input: surrounding whitespace ignored, non-finite rejected.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
