//! Text coercion for table cells and preformatted blocks

use serde_json::{Number, Value};

/// Text shown for one table cell.
///
/// Missing keys and `null` render empty, nested objects and arrays render as
/// pretty-printed JSON, scalars render as their plain text form.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number_text(number),
        Some(nested @ (Value::Object(_) | Value::Array(_))) => pretty_json(nested),
    }
}

/// Two-space indented JSON for preformatted output.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Plain text form of a JSON number, as JavaScript's `String(number)` gives it.
///
/// Integral floats drop their fractional part so `3.0` reads as `3`.
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form
/// (`1e+21`, `1e-7`).
fn number_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) if !float.is_finite() => float.to_string(),
        Some(float) if float.abs() >= 1e21 || float.abs() < 1e-6 => exponent_text(float),
        Some(float) if float.fract() == 0.0 => format!("{float:.0}"),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

/// Shortest exponent form with an explicit sign on positive exponents
fn exponent_text(float: f64) -> String {
    let text = format!("{float:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
