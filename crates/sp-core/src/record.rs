//! Raw JSON-lines records and null-filling field access
//!
//! Dataset files hold one JSON object per line. A [`RawRecord`] keeps the
//! parsed object together with its position in the file and exposes typed
//! accessors that replace absent or `null` fields with a zero sentinel.

use crate::error::{CoreError, CoreResult};
use serde_json::{Map, Value};

/// Sentinel stored for absent or null text fields
pub const TEXT_SENTINEL: &str = "0";

/// One parsed line of a JSON-lines dataset file
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 0-based position among the records of the file
    pub index: usize,
    /// 1-based line number in the file
    pub line: usize,
    fields: Map<String, Value>,
}

/// Parse JSON-lines text into records, skipping blank lines
pub fn parse_json_lines(content: &str) -> CoreResult<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line_no = line_idx + 1;
        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| CoreError::MalformedRecord {
                line: line_no,
                message: e.to_string(),
            })?;
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(CoreError::MalformedRecord {
                    line: line_no,
                    message: format!("expected a JSON object, found {}", type_name(&other)),
                })
            }
        };
        records.push(RawRecord {
            index: records.len(),
            line: line_no,
            fields,
        });
    }
    Ok(records)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl RawRecord {
    /// Field value, treating JSON `null` as absent
    fn present(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Text field; absent or null becomes [`TEXT_SENTINEL`]
    pub fn text(&self, field: &str) -> String {
        match self.present(field) {
            None => TEXT_SENTINEL.to_string(),
            Some(value) => render_text(value),
        }
    }

    /// Floating point field; absent, null or blank becomes `0.0`
    pub fn float(&self, field: &str) -> CoreResult<f64> {
        match self.present(field) {
            None => Ok(0.0),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| self.invalid(field, "number", n.to_string())),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(0.0),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.invalid(field, "number", s.clone())),
            Some(other) => Err(self.invalid(field, "number", other.to_string())),
        }
    }

    /// Integer field; absent, null or blank becomes `0`
    pub fn int(&self, field: &str) -> CoreResult<i64> {
        match self.present(field) {
            None => Ok(0),
            Some(value) => self.parse_int(field, value),
        }
    }

    fn parse_int(&self, field: &str, value: &Value) -> CoreResult<i64> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                // Integral floats such as 2000.0 are accepted
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                    _ => Err(self.invalid(field, "integer", n.to_string())),
                }
            }
            Value::String(s) if s.trim().is_empty() => Ok(0),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| self.invalid(field, "integer", s.clone())),
            other => Err(self.invalid(field, "integer", other.to_string())),
        }
    }

    fn invalid(&self, field: &str, expected: &'static str, found: String) -> CoreError {
        CoreError::InvalidField {
            line: self.line,
            field: field.to_string(),
            expected,
            found,
        }
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
