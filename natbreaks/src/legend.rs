use crate::model::{ClassRange, Color};
use serde::Serialize;

pub const LEGEND_TITLE: &str = "Price Ranges";
pub const OPEN_UPPER: &str = "∞";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendRow {
    pub color: Color,
    pub label: String,
}

pub fn legend_rows(ranges: &[ClassRange]) -> Vec<LegendRow> {
    ranges
        .iter()
        .map(|r| LegendRow {
            color: r.color,
            label: format!(
                "{} - {}",
                format_grouped(r.min),
                r.max.map_or_else(|| OPEN_UPPER.to_string(), format_grouped)
            ),
        })
        .collect()
}

/// en-US style number text: comma thousands separators, at most three
/// fraction digits, trailing zeros dropped.
pub fn format_grouped(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { OPEN_UPPER.to_string() } else { format!("-{}", OPEN_UPPER) };
    }
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    // no "-0" after rounding
    if v < 0.0 && out.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        out.insert(0, '-');
    }
    out
}
