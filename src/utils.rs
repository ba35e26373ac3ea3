/// Formats a dollar amount with thousands separators, e.g. `$30,000`.
pub fn fmt_usd(v: f64) -> String {
    if !v.is_finite() {
        return "—".to_owned();
    }
    let rounded = v.round().abs() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v.round() < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}
