use chrono::{DateTime, Utc};

/// # Summary
/// 以美元格式展示价格，保留两位小数并带千分位。
///
/// # Examples
/// `1234.5` → `$1,234.50`，`-0.5` → `-$0.50`。
///
/// # Returns
/// 格式化后的字符串，非有限值返回 `n/a`。
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 四舍五入后为 0.00，不应显示负号
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// 页眉的刷新时间，如 `March 02, 2026 – 14:30:00`
pub fn format_last_updated(at: DateTime<Utc>) -> String {
    at.format("%B %d, %Y – %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(71.237), "$71.24");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-2.5), "-$2.50");
        assert_eq!(format_usd(-0.001), "$0.00");
        assert_eq!(format_usd(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_last_updated() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 5).unwrap();
        assert_eq!(format_last_updated(at), "March 02, 2026 – 14:30:05");
    }
}
