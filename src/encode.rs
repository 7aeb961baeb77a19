//! Conversion of DynamoDB attribute values into JSON.
//!
//! DynamoDB carries numbers as arbitrary-precision decimal text, which
//! `serde_json` has no native representation for. The one non-obvious rule
//! lives here: a decimal with zero fractional part encodes as a JSON integer,
//! anything else as a float. Everything other than numbers maps structurally
//! (strings, booleans, null, lists, maps, sets; binary becomes base64 text).

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// Convert one table record into a JSON object.
pub fn record_to_json(item: &HashMap<String, AttributeValue>) -> Result<Value> {
    let mut object = Map::with_capacity(item.len());
    for (name, attr) in item {
        object.insert(name.clone(), attribute_to_json(attr)?);
    }
    Ok(Value::Object(object))
}

/// Convert a single attribute value, recursing through lists and maps.
pub fn attribute_to_json(attr: &AttributeValue) -> Result<Value> {
    match attr {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => Ok(Value::Number(decimal_to_number(n)?)),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::B(blob) => Ok(Value::String(STANDARD.encode(blob.as_ref()))),
        AttributeValue::L(list) => list.iter().map(attribute_to_json).collect(),
        AttributeValue::M(map) => {
            let mut object = Map::with_capacity(map.len());
            for (name, inner) in map {
                object.insert(name.clone(), attribute_to_json(inner)?);
            }
            Ok(Value::Object(object))
        }
        AttributeValue::Ss(set) => Ok(Value::Array(
            set.iter().map(|s| Value::String(s.clone())).collect(),
        )),
        AttributeValue::Ns(set) => set
            .iter()
            .map(|n| decimal_to_number(n).map(Value::Number))
            .collect(),
        AttributeValue::Bs(set) => Ok(Value::Array(
            set.iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        )),
        other => Err(Error::UnsupportedAttribute(format!("{:?}", other))),
    }
}

/// Encode one decimal string per the integer-or-float rule.
///
/// Integral values that do not fit in 64 bits fall back to a float rather
/// than failing.
pub fn decimal_to_number(text: &str) -> Result<Number> {
    if let Some(repr) = integral_repr(text) {
        if let Ok(i) = repr.parse::<i64>() {
            return Ok(Number::from(i));
        }
        if let Ok(u) = repr.parse::<u64>() {
            return Ok(Number::from(u));
        }
    }
    let f: f64 = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(text.to_string()))?;
    Number::from_f64(f).ok_or_else(|| Error::InvalidNumber(text.to_string()))
}

/// If `text` is a decimal with zero fractional part, return its canonical
/// integer representation (`"5.00"` -> `"5"`, `"1.5E+1"` -> `"15"`).
/// Returns `None` for non-integral or malformed input.
fn integral_repr(text: &str) -> Option<String> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    // DynamoDB may hand back exponent notation for large magnitudes.
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().ok()?),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    // Treat the value as digits * 10^-scale.
    let digits = format!("{int_part}{frac_part}");
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let scale = frac_part.len() as i64 - exponent as i64;

    if scale <= 0 {
        let mut repr = String::new();
        if negative {
            repr.push('-');
        }
        repr.push_str(digits);
        repr.extend(std::iter::repeat('0').take((-scale) as usize));
        return Some(repr);
    }

    let scale = scale as usize;
    if digits.len() <= scale {
        // Magnitude below one; integral only when every digit is zero.
        return digits.bytes().all(|b| b == b'0').then(|| "0".to_string());
    }
    let (head, tail) = digits.split_at(digits.len() - scale);
    if tail.bytes().all(|b| b == b'0') {
        Some(if negative {
            format!("-{head}")
        } else {
            head.to_string()
        })
    } else {
        None
    }
}
