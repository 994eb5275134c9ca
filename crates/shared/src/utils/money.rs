pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
