use log::error;
use serde::de::DeserializeOwned;

use crate::error::{FormError, FormErrorKind, FormResult};

pub fn from_binary<T>(binary: Vec<u8>) -> FormResult<T>
    where T: DeserializeOwned,
{
    if binary.is_empty() {
        error!("binary.empty");
        return Err(FormError::throw("binary.empty", FormErrorKind::InvalidData));
    }

    let string = match String::from_utf8(binary) {
        Ok(utf8) => utf8,
        Err(err) => {
            error!("failed.parsing.binary => Err: {}", err);
            return Err(FormError::throw("invalid.binary", FormErrorKind::InvalidData));
        }
    };
    Ok(serde_json::from_str::<T>(&string)?)
}

/// `Number.prototype.toString` for finite values: plain decimals in
/// [1e-6, 1e21), exponent form with an explicit sign outside it.
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if !f.is_finite() {
        return f.to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return format!("{}", f);
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Renders a JSON value the way a JavaScript template literal would.
pub fn js_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => js_number(f),
            _ => n.to_string(),
        },
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::Null => String::new(),
                other => js_display(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => "[object Object]".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
