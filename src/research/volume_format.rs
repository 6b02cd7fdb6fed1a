/// Format a number with `,` thousands separators
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_have_no_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(7), "7");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn test_volume_bounds() {
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(10999), "10,999");
    }

    #[test]
    fn test_large_numbers() {
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(100_000), "100,000");
        assert_eq!(format_thousands(u32::MAX), "4,294,967,295");
    }
}
