//! 表示用フォーマットヘルパー

/// UNIXタイムスタンプ (秒) を `YYYY-MM-DD` (UTC) に変換
pub fn format_timestamp_date(timestamp: i64) -> Option<String> {
    if timestamp <= 0 {
        return None;
    }
    let days = timestamp / 86400;
    let (year, month, day) = days_to_ymd(days);
    Some(format!("{}-{:02}-{:02}", year, month, day))
}

fn days_to_ymd(days: i64) -> (i64, i64, i64) {
    // 1970-01-01 からの日数をグレゴリオ暦に変換
    let mut remaining = days;
    let mut year = 1970;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }
    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };
    let mut month = 1;
    for &d in &days_in_months {
        if remaining < d {
            break;
        }
        remaining -= d;
        month += 1;
    }
    (year, month, remaining + 1)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// 3桁区切り (小数は切り捨て)
pub fn format_thousands(value: f64) -> String {
    let digits = (value.trunc() as i64).unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0.0 {
        out.insert(0, '-');
    }
    out
}

/// `<...>` タグを取り除く
pub fn strip_html_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// 先頭 `max_chars` 文字
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_date() {
        assert_eq!(format_timestamp_date(0), None);
        assert_eq!(format_timestamp_date(86400), Some("1970-01-02".to_string()));
        // 2024-02-29 12:00:00 UTC
        assert_eq!(format_timestamp_date(1_709_208_000), Some("2024-02-29".to_string()));
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(950.0), "950");
        assert_eq!(format_thousands(85000.0), "85,000");
        assert_eq!(format_thousands(1234567.89), "1,234,567");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html_tags("<p>Build <b>great</b> things</p>"), "Build great things");
        assert_eq!(strip_html_tags("a > b"), "a > b");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("エンジニア募集", 5), "エンジニア");
        assert_eq!(truncate_chars("short", 200), "short");
    }
}
