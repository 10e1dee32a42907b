/// Normalize text by replacing control characters with spaces and normalizing whitespace
/// Survey headers frequently contain newlines and doubled spaces from manual editing
pub fn normalize_string(value: &str) -> String {
    value
        .chars() // Process character by character
        .map(|c| {
            if c.is_control() {
                ' ' // Replace control characters (newlines, tabs, etc.) with spaces
            } else {
                c // Keep all other characters
            }
        })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" ") // Join back with single spaces
        .trim() // Remove leading/trailing whitespace
        .to_string()
}

/// Convert a 0-based column index to its spreadsheet letter (0 -> A, 25 -> Z, 26 -> AA)
pub fn column_letter(index: usize) -> String {
    // Bijective base-26: there is no zero digit, so borrow one before each division
    let mut n = index + 1;
    let mut letters: Vec<char> = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_string("  广告活动名称  "), "广告活动名称");
        assert_eq!(normalize_string("host\n精准词"), "host 精准词");
        assert_eq!(normalize_string("a\t\tb   c"), "a b c");
    }

    #[test]
    fn test_column_letters_single() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(7), "H");
        assert_eq!(column_letter(16), "Q");
        assert_eq!(column_letter(25), "Z");
    }

    #[test]
    fn test_column_letters_double() {
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }
}
