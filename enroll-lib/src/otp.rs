pub const OTP_DIGITS: usize = 6;

/// a one-time code is exactly six ascii digits
pub fn code_valid(given: &str) -> bool {
    let mut digit_count = 0;

    for ch in given.chars() {
        if !ch.is_ascii_digit() {
            return false;
        }

        digit_count += 1;

        if digit_count > OTP_DIGITS {
            return false;
        }
    }

    digit_count == OTP_DIGITS
}

/// the same filtering an input field applies as a code is typed. anything
/// that is not an ascii digit is dropped and the result is capped at
/// [`OTP_DIGITS`] characters
pub fn filter_code_input(given: &str) -> String {
    given.chars()
        .filter(|ch| ch.is_ascii_digit())
        .take(OTP_DIGITS)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_validation() {
        assert!(code_valid("123456"));
        assert!(code_valid("000000"));

        assert!(!code_valid(""));
        assert!(!code_valid("12345"));
        assert!(!code_valid("1234567"));
        assert!(!code_valid("12345a"));
        assert!(!code_valid("12 456"));
    }

    #[test]
    fn input_filtering() {
        assert_eq!(filter_code_input("123456"), "123456");
        assert_eq!(filter_code_input("12a4 56"), "12456");
        assert_eq!(filter_code_input("1234567890"), "123456");
        assert_eq!(filter_code_input("abc"), "");
    }
}
