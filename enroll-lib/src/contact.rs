use email_address::EmailAddress;

pub const MOBILE_NUMBER_DIGITS: usize = 10;

/// a valid mobile number is exactly ten digits and starts with 6, 7, 8 or 9
pub fn mobile_number_valid(given: &str) -> bool {
    let mut iter = given.chars();

    let Some(first) = iter.next() else {
        return false;
    };

    if !matches!(first, '6'..='9') {
        return false;
    }

    let mut digit_count = 1;

    for ch in iter {
        if !ch.is_ascii_digit() {
            return false;
        }

        digit_count += 1;

        if digit_count > MOBILE_NUMBER_DIGITS {
            return false;
        }
    }

    digit_count == MOBILE_NUMBER_DIGITS
}

pub fn email_valid(given: &str) -> bool {
    EmailAddress::is_valid(given)
}

/// the unique identifier of an identity candidate. which form is used depends
/// on the signup flow but the backend accepts either
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    Mobile(String),
    Email(String),
}

impl Contact {
    pub fn parse<G>(given: G) -> Option<Contact>
    where
        G: AsRef<str>
    {
        let trimmed = given.as_ref().trim();

        if mobile_number_valid(trimmed) {
            Some(Contact::Mobile(trimmed.to_owned()))
        } else if email_valid(trimmed) {
            Some(Contact::Email(trimmed.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Contact::Mobile(v) => v.as_str(),
            Contact::Email(v) => v.as_str(),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Contact::Mobile(v) => v,
            Contact::Email(v) => v,
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Contact {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mobile_number_validation() {
        let valid = vec![
            "9876543210",
            "6000000000",
        ];

        for test in valid {
            assert!(mobile_number_valid(test), "valid number failed {:?}", test);
        }

        let invalid = vec![
            "",
            "1234567890",
            "987654321",
            "98765432100",
            "98765a3210",
            "+919876543210",
        ];

        for test in invalid {
            assert!(!mobile_number_valid(test), "invalid number failed {:?}", test);
        }
    }

    #[test]
    fn parse_classifies_forms() {
        assert_eq!(
            Contact::parse(" 9876543210 "),
            Some(Contact::Mobile(String::from("9876543210")))
        );
        assert_eq!(
            Contact::parse("asha@example.com"),
            Some(Contact::Email(String::from("asha@example.com")))
        );
        assert_eq!(Contact::parse("not a contact"), None);
        assert_eq!(Contact::parse("12345"), None);
    }
}
