#![forbid(unsafe_code)]

use crate::model::Brkt;
use serde_json::Value;

/// Rounds a currency amount to cents, halves away from zero.
///
/// The scaled amount is nudged a few ulps away from zero first: decimal halves
/// such as 1.005 are stored just below the half in binary.
pub fn round_currency(value: f64) -> f64 {
    let scaled = value * 100.0;
    let nudge = scaled.abs() * f64::EPSILON * 4.0;
    (scaled + nudge.copysign(scaled)).round() / 100.0
}

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Fee for `count` units at `unit_fee` each (e.g. brackets entered × bracket fee).
///
/// Missing, non-finite or zero inputs give 0; the product is not rounded.
pub fn entry_fee(count: Option<f64>, unit_fee: Option<f64>) -> f64 {
    let (Some(count), Some(unit_fee)) = (usable(count), usable(unit_fee)) else {
        return 0.0;
    };
    if count == 0.0 || unit_fee == 0.0 {
        return 0.0;
    }
    count * unit_fee
}

/// First + second + admin, rounded to cents. Any missing part gives 0, not a partial sum.
pub fn fsa_total(first: Option<f64>, second: Option<f64>, admin: Option<f64>) -> f64 {
    match (usable(first), usable(second), usable(admin)) {
        (Some(first), Some(second), Some(admin)) => round_currency(first + second + admin),
        _ => 0.0,
    }
}

/// Numeric reading of a JSON value: numbers and numeric strings only.
pub fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

pub fn entry_fee_value(count: &Value, unit_fee: &Value) -> f64 {
    entry_fee(numeric(count), numeric(unit_fee))
}

pub fn fsa_total_value(first: &Value, second: &Value, admin: &Value) -> f64 {
    fsa_total(numeric(first), numeric(second), numeric(admin))
}

/// A bracket's fsa must equal first + second + admin and the fee collected from a full bracket.
pub fn brkt_fsa_matches(brkt: &Brkt) -> bool {
    let fsa = round_currency(brkt.fsa);
    fsa == fsa_total(Some(brkt.first), Some(brkt.second), Some(brkt.admin))
        && fsa == round_currency(entry_fee(Some(brkt.players as f64), Some(brkt.fee)))
}
