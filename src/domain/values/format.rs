/// Compact number with a K/M/B/T suffix, two decimals.
/// Non-finite input renders as `"0"`.
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return "0".to_string();
    }
    let abs = num.abs();
    if abs >= 1e12 {
        format!("{:.2}T", num / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", num / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", num / 1e6)
    } else if abs >= 1e3 {
        format!("{:.2}K", num / 1e3)
    } else {
        format!("{num:.2}")
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.decimals$}%", 0.0);
    }
    format!("{value:.decimals$}%")
}

/// Dashboard cell for a derived metric: non-positive values mean "no estimate".
pub fn positive_or_na(value: f64, render: impl FnOnce(f64) -> String) -> String {
    if value > 0.0 {
        render(value)
    } else {
        "N/A".to_string()
    }
}
