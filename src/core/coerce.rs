//! 寬鬆的欄位轉型：字串或數字都接受，失敗時回傳預設值。
//!
//! 字串採「取最長的數字前綴」語意，例如 `"19.07abc"` 得到 `19.07`，
//! 沒有任何數字前綴時回傳 `0.0` / `0`。

use crate::domain::model::{Coordinate, CustomerRecord, RawRecord};
use serde_json::Value;

pub const ID_FIELD: &str = "user_id";
pub const NAME_FIELD: &str = "name";
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";

/// 轉成浮點數；缺少、無法解析或型別不符時回傳 `0.0`
pub fn parse_numeric_or_default(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => float_prefix(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// 轉成整數 id；浮點數直接截斷，超出 i64 範圍時飽和
pub fn coerce_id(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.is_u64() {
                i64::MAX
            } else {
                n.as_f64().map(|f| f as i64).unwrap_or(0)
            }
        }
        Some(Value::String(s)) => integer_prefix(s).unwrap_or(0),
        _ => 0,
    }
}

/// 名稱不是字串時用 JSON 文字表示，缺少時為空字串
pub fn coerce_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

pub fn coordinate_of(record: &RawRecord) -> Coordinate {
    Coordinate::new(
        parse_numeric_or_default(record.get(LATITUDE_FIELD)),
        parse_numeric_or_default(record.get(LONGITUDE_FIELD)),
    )
}

impl From<&RawRecord> for CustomerRecord {
    fn from(record: &RawRecord) -> Self {
        CustomerRecord {
            id: coerce_id(record.get(ID_FIELD)),
            name: coerce_name(record.get(NAME_FIELD)),
            location: coordinate_of(record),
        }
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

fn skip_sign(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b'+') | Some(b'-') => pos + 1,
        _ => pos,
    }
}

fn float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let int_start = skip_sign(bytes, 0);
    let int_end = skip_digits(bytes, int_start);
    let mut end = int_end;
    let mut has_digits = int_end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        if frac_end > end + 1 {
            end = frac_end;
            has_digits = true;
        }
    }
    if !has_digits {
        return None;
    }

    // 指數部分必須有數字才算數，否則 "1e" 只取 "1"
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_start = skip_sign(bytes, end + 1);
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

fn integer_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_start = skip_sign(bytes, 0);
    let end = skip_digits(bytes, digits_start);
    if end == digits_start {
        return None;
    }

    let negative = bytes[0] == b'-';
    let parsed = s[..end].parse::<i64>().ok();
    Some(parsed.unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_accepts_strings_and_numbers() {
        assert_eq!(parse_numeric_or_default(Some(&json!("19.0760"))), 19.076);
        assert_eq!(parse_numeric_or_default(Some(&json!(72.8777))), 72.8777);
        assert_eq!(parse_numeric_or_default(Some(&json!(-3))), -3.0);
        assert_eq!(parse_numeric_or_default(Some(&json!("  -12.5"))), -12.5);
        assert_eq!(parse_numeric_or_default(Some(&json!(".5"))), 0.5);
        assert_eq!(parse_numeric_or_default(Some(&json!("1e2"))), 100.0);
    }

    #[test]
    fn test_numeric_takes_leading_prefix() {
        assert_eq!(parse_numeric_or_default(Some(&json!("19.07abc"))), 19.07);
        assert_eq!(parse_numeric_or_default(Some(&json!("5."))), 5.0);
        assert_eq!(parse_numeric_or_default(Some(&json!("2e"))), 2.0);
        assert_eq!(parse_numeric_or_default(Some(&json!("7 km"))), 7.0);
    }

    #[test]
    fn test_numeric_defaults_to_zero() {
        assert_eq!(parse_numeric_or_default(None), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&Value::Null)), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&json!(""))), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&json!("abc"))), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&json!("NaN"))), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&json!("-"))), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&json!(true))), 0.0);
        assert_eq!(parse_numeric_or_default(Some(&json!([1.0]))), 0.0);
    }

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(Some(&json!(5))), 5);
        assert_eq!(coerce_id(Some(&json!("5"))), 5);
        assert_eq!(coerce_id(Some(&json!(" 42abc"))), 42);
        assert_eq!(coerce_id(Some(&json!("12.9"))), 12);
        assert_eq!(coerce_id(Some(&json!(12.9))), 12);
        assert_eq!(coerce_id(Some(&json!("-7"))), -7);
        assert_eq!(coerce_id(Some(&json!(u64::MAX))), i64::MAX);
        assert_eq!(coerce_id(Some(&json!("99999999999999999999"))), i64::MAX);
        assert_eq!(coerce_id(Some(&json!("abc"))), 0);
        assert_eq!(coerce_id(Some(&json!(false))), 0);
        assert_eq!(coerce_id(None), 0);
    }

    #[test]
    fn test_coerce_name() {
        assert_eq!(coerce_name(Some(&json!("Jane"))), "Jane");
        assert_eq!(coerce_name(Some(&json!(17))), "17");
        assert_eq!(coerce_name(None), "");
        assert_eq!(coerce_name(Some(&Value::Null)), "");
    }

    #[test]
    fn test_customer_from_raw_record() {
        let record = RawRecord {
            data: serde_json::from_value(json!({
                "user_id": "8",
                "name": "Ana",
                "latitude": "19.0760",
                "longitude": 72.8777
            }))
            .unwrap(),
        };

        let customer = CustomerRecord::from(&record);
        assert_eq!(customer.id, 8);
        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.location, Coordinate::new(19.076, 72.8777));
    }

    #[test]
    fn test_missing_coordinates_become_origin() {
        let record = RawRecord {
            data: serde_json::from_value(json!({"user_id": 1})).unwrap(),
        };
        assert_eq!(coordinate_of(&record), Coordinate::new(0.0, 0.0));
    }
}
