pub fn check_control_whitespace<G>(
    given: G,
    max_chars: Option<usize>
) -> bool
where
    G: AsRef<str>
{
    let given_ref = given.as_ref();
    let mut char_count = 0;

    for ch in given_ref.chars() {
        if ch.is_control() || ch.is_whitespace() {
            return false;
        }

        char_count += 1;

        if let Some(max) = max_chars {
            if char_count > max {
                return false;
            }
        }
    }

    true
}

pub fn check_control<G>(
    given: G,
    max_chars: Option<usize>
) -> bool
where
    G: AsRef<str>
{
    let given_ref = given.as_ref();
    let mut char_count = 0;

    for ch in given_ref.chars() {
        if ch.is_control() {
            return false;
        }

        char_count += 1;

        if let Some(max) = max_chars {
            if char_count > max {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_control_whitespace_whitespace_chars() {
        let leading = String::from(" test");
        let trailing = String::from("test ");
        let contains = String::from("test test");

        assert!(!check_control_whitespace(leading, None), "leading whitespace characters");
        assert!(!check_control_whitespace(trailing, None), "trailing whitespace characters");
        assert!(!check_control_whitespace(contains, None), "contains whitespace characters");
    }

    #[test]
    fn check_control_whitespace_control_chars() {
        let trailing = String::from("test\u{0000}");
        let leading = String::from("\u{0000}test");

        assert!(!check_control_whitespace(trailing, None), "trailing control characters");
        assert!(!check_control_whitespace(leading, None), "leading control characters");
    }

    #[test]
    fn check_control_whitespace_max_length() {
        let k = String::from("abcdefghijklmnopqrstuvwxyzA");
        let count = k.chars().count();
        let max = count - 1;

        assert!(!check_control_whitespace(k, Some(max)), "max {} total {}", max, count);
    }

    #[test]
    fn check_control_allows_inner_whitespace() {
        let contains = String::from("Asha Rao");

        assert!(check_control(contains, None), "inner whitespace characters");
        assert!(!check_control("Asha\u{0000}Rao", None), "contains control characters");
    }
}
