/// Shorten a wallet to `chars` characters on each side of an ellipsis.
///
/// Wallets no longer than `2 * chars` are returned unchanged.
pub fn truncate_wallet(wallet: &str, chars: usize) -> String {
    let len = wallet.chars().count();
    if len <= chars * 2 {
        return wallet.to_string();
    }
    let head: String = wallet.chars().take(chars).collect();
    let tail: String = wallet.chars().skip(len - chars).collect();
    format!("{head}...{tail}")
}

/// Group an integer count with thousands separators: `12345` -> `12,345`.
pub fn format_count(count: usize) -> String {
    group_digits(&count.to_string())
}

/// Format an amount with thousands separators and at most three decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let mut out = String::new();
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
