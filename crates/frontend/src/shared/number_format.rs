//! Number formatting for counters shown in tables and progress text

/// Formats an integer with a thousands separator
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_separator(1234567, ','), "1,234,567");
/// ```
pub fn format_with_separator(value: u64, separator: char) -> String {
    let digits = value.to_string();

    // Insert a separator every 3 digits from the end
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Formats a row count the way the browser's en-US locale does
pub fn format_count(value: u64) -> String {
    format_with_separator(value, ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_with_separator() {
        assert_eq!(format_with_separator(1234567, ' '), "1 234 567");
        assert_eq!(format_with_separator(12, ' '), "12");
    }
}
