use strum::{AsRefStr as StrumAsRefStr};

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MAX_PASSWORD_CHARS: usize = 512;

pub fn password_valid(given: &str) -> bool {
    let iter = given.chars();
    let mut char_count = 0;

    for ch in iter {
        if ch.is_control() {
            return false;
        }

        char_count += 1;

        if char_count > MAX_PASSWORD_CHARS {
            return false;
        }
    }

    if char_count < MIN_PASSWORD_CHARS {
        return false;
    }

    true
}

/// advisory strength score between 0 and 100. five equally weighted checks:
/// minimum length, an uppercase letter, a lowercase letter, a digit and a
/// symbol. feedback only, the only hard gate is the minimum length
pub fn strength_score(given: &str) -> u8 {
    let mut passed: u8 = 0;

    if given.chars().count() >= MIN_PASSWORD_CHARS {
        passed += 1;
    }

    if given.chars().any(|ch| ch.is_ascii_uppercase()) {
        passed += 1;
    }

    if given.chars().any(|ch| ch.is_ascii_lowercase()) {
        passed += 1;
    }

    if given.chars().any(|ch| ch.is_ascii_digit()) {
        passed += 1;
    }

    if given.chars().any(|ch| !ch.is_ascii_alphanumeric()) {
        passed += 1;
    }

    passed * 20
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    StrumAsRefStr
)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Strength {
        if score <= 40 {
            Strength::Weak
        } else if score <= 80 {
            Strength::Medium
        } else {
            Strength::Strong
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_ref(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn password_validation() {
        let valid = vec![
            String::from("Str0ng!Pass"),
            String::from("Sharper Snowboard Equinox Faucet Monoxide0"),
        ];

        for test in valid {
            assert!(password_valid(&test), "valid string failed {:?}", test);
        }

        let invalid = vec![
            String::from("pass\u{0000}word"),
            crate::string_to_len(MIN_PASSWORD_CHARS - 1),
            crate::string_to_len(MAX_PASSWORD_CHARS + 1),
        ];

        for test in invalid {
            assert!(!password_valid(&test), "invalid string failed {:?}", test);
        }
    }

    #[test]
    fn strength_scoring() {
        assert_eq!(strength_score(""), 0);
        assert_eq!(strength_score("abcdefgh"), 40);
        assert_eq!(strength_score("Abcdefg1"), 80);
        assert_eq!(strength_score("Str0ng!Pass"), 100);
    }

    #[test]
    fn strength_labels() {
        assert_eq!(Strength::from_score(20), Strength::Weak);
        assert_eq!(Strength::from_score(40), Strength::Weak);
        assert_eq!(Strength::from_score(60), Strength::Medium);
        assert_eq!(Strength::from_score(80), Strength::Medium);
        assert_eq!(Strength::from_score(100), Strength::Strong);
    }
}
