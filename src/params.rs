//! URL query-string persistence for calculator input records
//!
//! Every calculator's input record round-trips through a query string so a
//! filled-in analysis can be shared as a link. The record shape stays typed;
//! this module goes through `serde_json::Value` so one implementation covers
//! all four strategies.
//!
//! Save skips empty and zero-valued fields (a zero is always the field's
//! meaningful "off" state). Load parses values as floats over a copy of the
//! defaults, ignores unknown keys, and keeps the default for values that do
//! not parse.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

/// Failures at the query-string boundary
#[derive(Debug, Error)]
pub enum ParamError {
    /// Record failed to serialize or deserialize through serde_json
    #[error("input record conversion failed: {0}")]
    Convert(#[from] serde_json::Error),

    /// Record is not a flat map of named fields
    #[error("input record must serialize to a flat key-value map")]
    NotARecord,
}

/// Serialize an input record to a query string, e.g.
/// `purchase_price=300000&down_payment_percent=20&...`.
///
/// Fields that are null, zero, or the empty string are omitted; boolean
/// fields are always written so a toggle state survives the round trip.
pub fn to_query<T: Serialize>(inputs: &T) -> Result<String, ParamError> {
    let value = serde_json::to_value(inputs)?;
    let map = match value {
        Value::Object(map) => map,
        _ => return Err(ParamError::NotARecord),
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in &map {
        match value {
            Value::Null => {}
            Value::String(s) if s.is_empty() => {}
            Value::Number(n) if n.as_f64() == Some(0.0) => {}
            Value::Number(n) => pairs.push(format!("{}={}", key, format_query_number(n))),
            Value::Bool(b) => pairs.push(format!("{}={}", key, b)),
            Value::String(s) => pairs.push(format!("{}={}", key, s)),
            // Input records are flat; nested values would be a bug upstream
            Value::Array(_) | Value::Object(_) => return Err(ParamError::NotARecord),
        }
    }

    Ok(pairs.join("&"))
}

/// Parse a query string over a record of defaults.
///
/// Returns the merged record and whether any known key was present. Unknown
/// keys are ignored; a value that fails to parse for its field's type keeps
/// the default and logs a warning.
pub fn from_query<T>(query: &str, defaults: &T) -> Result<(T, bool), ParamError>
where
    T: Serialize + DeserializeOwned,
{
    let value = serde_json::to_value(defaults)?;
    let mut map = match value {
        Value::Object(map) => map,
        _ => return Err(ParamError::NotARecord),
    };

    let mut has_params = false;
    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let key = percent_decode(key);
        let raw = percent_decode(raw);

        if let Some(slot) = map.get_mut(key.as_ref()) {
            has_params = true;
            merge_value(&key, &raw, slot);
        }
    }

    let merged = serde_json::from_value(Value::Object(map))?;
    Ok((merged, has_params))
}

/// Merge one raw query value into a typed slot, keyed off the default's type
fn merge_value(key: &str, raw: &str, slot: &mut Value) {
    match slot {
        Value::Number(_) => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(n) => *slot = Value::Number(n),
            None => log::warn!("ignoring non-numeric value {:?} for field {}", raw, key),
        },
        Value::Bool(_) => match raw {
            "true" | "1" => *slot = Value::Bool(true),
            "false" | "0" => *slot = Value::Bool(false),
            _ => log::warn!("ignoring non-boolean value {:?} for field {}", raw, key),
        },
        Value::String(_) => *slot = Value::String(raw.to_string()),
        _ => {}
    }
}

/// Render an f64 without a trailing `.0` when it is integral
fn format_query_number(n: &Number) -> String {
    match n.as_f64() {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        _ => n.to_string(),
    }
}

/// Decode `%XX` escapes and `+` as space; invalid escapes pass through as-is
fn percent_decode(input: &str) -> std::borrow::Cow<'_, str> {
    if !input.contains('%') && !input.contains('+') {
        return std::borrow::Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                if let Some(byte) = input
                    .get(i + 1..i + 3)
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    std::borrow::Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleInputs {
        purchase_price: f64,
        down_payment_percent: f64,
        hoa_fees: f64,
        seasonal_pricing: bool,
        market: String,
    }

    fn defaults() -> SampleInputs {
        SampleInputs {
            purchase_price: 300_000.0,
            down_payment_percent: 20.0,
            hoa_fees: 0.0,
            seasonal_pricing: false,
            market: "none".to_string(),
        }
    }

    #[test]
    fn test_zero_fields_are_omitted() {
        let query = to_query(&defaults()).unwrap();
        assert!(query.contains("purchase_price=300000"));
        assert!(query.contains("down_payment_percent=20"));
        assert!(!query.contains("hoa_fees"));
        // Booleans always survive
        assert!(query.contains("seasonal_pricing=false"));
    }

    #[test]
    fn test_round_trip_reproduces_inputs() {
        let mut inputs = defaults();
        inputs.purchase_price = 412_500.75;
        inputs.hoa_fees = 150.0;
        inputs.seasonal_pricing = true;
        inputs.market = "denver".to_string();

        let query = to_query(&inputs).unwrap();
        let (loaded, has_params) = from_query::<SampleInputs>(&query, &defaults()).unwrap();

        assert!(has_params);
        assert_eq!(loaded, inputs);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (loaded, has_params) =
            from_query::<SampleInputs>("utm_source=twitter&purchase_price=250000", &defaults())
                .unwrap();
        assert!(has_params);
        assert_eq!(loaded.purchase_price, 250_000.0);
        assert_eq!(loaded.down_payment_percent, 20.0);
    }

    #[test]
    fn test_unparsable_value_keeps_default() {
        let (loaded, _) =
            from_query::<SampleInputs>("purchase_price=lots&seasonal_pricing=maybe", &defaults())
                .unwrap();
        assert_eq!(loaded.purchase_price, 300_000.0);
        assert!(!loaded.seasonal_pricing);
    }

    #[test]
    fn test_empty_query_has_no_params() {
        let (loaded, has_params) = from_query::<SampleInputs>("", &defaults()).unwrap();
        assert!(!has_params);
        assert_eq!(loaded, defaults());

        let (_, has_params) = from_query::<SampleInputs>("?", &defaults()).unwrap();
        assert!(!has_params);
    }

    #[test]
    fn test_leading_question_mark_and_decoding() {
        let (loaded, has_params) =
            from_query::<SampleInputs>("?market=mountain%20town&purchase_price=199000", &defaults())
                .unwrap();
        assert!(has_params);
        assert_eq!(loaded.market, "mountain town");
        assert_eq!(loaded.purchase_price, 199_000.0);
    }
}
