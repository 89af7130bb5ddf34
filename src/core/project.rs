//! Project name rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 13;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("project name pattern is valid")
});

/// Validate a proposed project name.
///
/// The name ends up as a directory name, a suffix of the `src/` target
/// directories and a quoted CMake value, so it is checked as-is: no trimming,
/// no case folding. Returns the unchanged name on success.
pub fn validate_project_name(name: &str) -> Result<&str> {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(Error::validation_invalid_argument(
            "projectName",
            format!(
                "Project name must be between {} and {} characters long",
                MIN_NAME_LEN, MAX_NAME_LEN
            ),
            Some(name.to_string()),
        ));
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(Error::validation_invalid_argument(
            "projectName",
            "Project name contains forbidden characters, allowed characters: A-z, 0-9, _",
            Some(name.to_string()),
        ));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_within_bounds() {
        for name in ["abc", "MyGame", "game_2", "A_b_C_1234567", "___", "123"] {
            assert_eq!(validate_project_name(name).unwrap(), name);
        }
    }

    #[test]
    fn accepts_every_length_in_range() {
        for len in MIN_NAME_LEN..=MAX_NAME_LEN {
            let name = "a".repeat(len);
            assert!(validate_project_name(&name).is_ok(), "length {}", len);
        }
    }

    #[test]
    fn rejects_short_and_long_names() {
        for name in ["", "a", "ab", "abcdefghijklmn", "MyVeryLongGameName"] {
            let err = validate_project_name(name).unwrap_err();
            assert_eq!(err.code.as_str(), "validation.invalid_argument");
            assert!(err.message.contains("between 3 and 13"), "{}", name);
        }
    }

    #[test]
    fn rejects_forbidden_characters() {
        for name in ["my-game", "my game", "game!", "g@me", "game.v2", "jeu_été", "tab\tname"] {
            let err = validate_project_name(name).unwrap_err();
            assert!(err.message.contains("forbidden characters"), "{}", name);
        }
    }

    #[test]
    fn does_not_trim_whitespace() {
        assert!(validate_project_name(" MyGame ").is_err());
    }

    #[test]
    fn length_is_checked_before_characters() {
        let err = validate_project_name("a-").unwrap_err();
        assert!(err.message.contains("between 3 and 13"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 3 characters, 6 bytes: passes the length check, fails the charset check
        let err = validate_project_name("ééé").unwrap_err();
        assert!(err.message.contains("forbidden characters"));
    }
}
