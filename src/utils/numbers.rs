//! Number formatting helpers for tables and chart labels.

const NBSP: char = '\u{a0}';

/// Formats an integer with non-breaking-space thousands separators,
/// or "-" when the value is missing.
pub fn format_integer(value: Option<i64>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Abbreviated axis-label formatting: 1500 -> "1.5k", 2000000 -> "2m".
pub fn label_k_formatter(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "t")
    } else if abs >= 1e9 {
        (value / 1e9, "b")
    } else if abs >= 1e6 {
        (value / 1e6, "m")
    } else if abs >= 1e3 {
        (value / 1e3, "k")
    } else {
        (value, "")
    };
    format!("{}{}", trim_decimals(scaled, 1), suffix)
}

/// Formats a float with up to `decimal_places` decimals, trimming trailing
/// zeros. Zero decimal places falls back to one, matching the table default.
pub fn format_float(value: f64, decimal_places: usize) -> String {
    let places = if decimal_places == 0 { 1 } else { decimal_places };
    trim_decimals(value, places)
}

/// Compact formatting aimed at roughly two significant places: large values
/// get thousands grouping, values >= 1 one optional decimal, and small
/// fractions keep their first significant digits.
pub fn format_two_significant_places(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value > 9.0 {
        return format_integer(Some(value.round() as i64));
    }
    if value >= 1.0 {
        return trim_decimals(value, 1);
    }
    let text = value.to_string();
    let fraction = text.get(2..).unwrap_or("");
    let mut result = String::from("0.");
    let mut significant = 0;
    for ch in fraction.chars() {
        if significant == 0 || ch != '0' {
            result.push(ch);
        }
        if significant > 0 {
            return result;
        }
        significant += 1;
    }
    result
}

fn trim_decimals(value: f64, places: usize) -> String {
    let text = format!("{:.*}", places, value);
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
