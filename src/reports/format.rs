//! Currency formatting for report output
//!
//! Rendering money is a presentation concern of the report layer; amounts in
//! the data model stay plain numbers.

/// Format a Rupiah amount with two decimals and thousands separators
///
/// `5000000.0` renders as `Rp 5,000,000.00`; negative values (nets can dip
/// below zero) carry the sign after the currency marker: `Rp -150.00`.
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("Rp {}{}.{}", sign, grouped, frac_part)
}
