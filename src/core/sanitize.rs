// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

// Registry package names: lowercase letters, digits, underscore.
static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("static pattern"));

/// Trim, lowercase and drop any whitespace inside the name.
pub fn normalize_package_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Normalize user input and check it against the naming rule.
/// Returns the normalized name on success.
pub fn validate_package_name(raw: &str) -> Result<String, ValidationError> {
    let name = normalize_package_name(raw);
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_valid_package_name(&name) {
        return Err(ValidationError::Invalid(name));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_spaces() {
        assert_eq!(normalize_package_name("  My Package "), "mypackage");
        assert_eq!(normalize_package_name("a\tb\nc"), "abc");
    }

    #[test]
    fn accepts_lowercase_digits_underscore() {
        assert_eq!(validate_package_name("my_package_2"), Ok(s!("my_package_2")));
        assert_eq!(validate_package_name(" Wireframe_Theme "), Ok(s!("wireframe_theme")));
    }

    #[test]
    fn rejects_hyphen_and_empty() {
        assert_eq!(
            validate_package_name("My-Package"),
            Err(ValidationError::Invalid(s!("my-package")))
        );
        assert_eq!(validate_package_name("   "), Err(ValidationError::Empty));
        assert!(validate_package_name("café").is_err());
    }
}
