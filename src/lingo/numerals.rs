//! Roman numerals, act names, and approximate time spans.

use std::time::Duration;

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub fn to_roman(num: i64) -> String {
    if num == 0 {
        return "N".to_string();
    }
    let mut result = String::new();
    if num < 0 {
        result.push('-');
    }
    let mut rest = num.unsigned_abs() as i64;
    for (value, symbol) in NUMERALS {
        while rest >= value {
            rest -= value;
            result.push_str(symbol);
        }
    }
    result
}

pub fn act_name(act: u32) -> String {
    if act == 0 {
        "Prologue".to_string()
    } else {
        format!("Act {}", to_roman(act as i64))
    }
}

/// One decimal place, dropping a trailing ".0".
fn format_float(num: f64) -> String {
    let formatted = format!("{:.1}", num);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Rough human-readable length: "~45s", "~1m", "~2.5h", "~1d".
pub fn format_timespan(span: Duration) -> String {
    let mut num = span.as_secs_f64();
    if num < 60.0 {
        return format!("~{}s", num as u64);
    }
    num /= 60.0;
    if num < 60.0 {
        return format!("~{}m", num as u64);
    }
    num /= 60.0;
    if num < 24.0 {
        return format!("~{}h", format_float(num));
    }
    num /= 24.0;
    format!("~{}d", format_float(num))
}
