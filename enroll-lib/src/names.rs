use crate::validation::check_control;

pub const MAX_NAME_CHARS: usize = 128;

pub fn name_part_valid(given: &str) -> bool {
    let trimmed = given.trim();

    !trimmed.is_empty() && check_control(trimmed, Some(MAX_NAME_CHARS))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn name_part_validation() {
        assert!(name_part_valid("Asha"));
        assert!(name_part_valid("Rao Kumar"));

        assert!(!name_part_valid(""));
        assert!(!name_part_valid("   "));
        assert!(!name_part_valid("As\u{0000}ha"));
        assert!(!name_part_valid(&crate::string_to_len(MAX_NAME_CHARS + 1)));
    }
}
