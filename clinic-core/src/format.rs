//! Форматирование полей для показа.

use crate::DashboardConfig;

/// Разделитель разрядов (неразрывный пробел), как в `ru-RU`.
const GROUP_SEPARATOR: char = '\u{a0}';

/// `"15.11.2025 9:5:00"` -> `"09:05"`. Секунды отбрасываются.
pub fn format_time_of_day(timestamp: &str) -> String {
    let time_part = timestamp.split(' ').nth(1).unwrap_or_default();
    let mut parts = time_part.split(':');
    let hour = parts.next().unwrap_or("00");
    let minute = parts.next().unwrap_or("00");
    format!("{}:{}", pad_two(hour), pad_two(minute))
}

fn pad_two(value: &str) -> String {
    let missing = 2usize.saturating_sub(value.chars().count());
    let mut padded = "0".repeat(missing);
    padded.push_str(value);
    padded
}

/// Дата до первого пробела.
pub fn split_date_part(timestamp: &str) -> &str {
    timestamp.split(' ').next().unwrap_or_default()
}

/// Сумма без дробной части с делением на разряды.
pub fn format_currency(amount: f64, config: &DashboardConfig) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let value = rounded as i64;
    let digits = value.unsigned_abs().to_string();

    let grouped = if digits.len() >= config.currency_min_grouping.max(1) {
        group_thousands(&digits)
    } else {
        digits
    };

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 2);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
