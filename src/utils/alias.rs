//! Alias generation and validation of user-requested aliases.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Upper bound on user-requested alias length.
const MAX_REQUESTED_LENGTH: usize = 64;

/// Aliases that cannot be requested by clients.
///
/// These names are shadowed by static routes, so an entry stored under them
/// could never be resolved via `GET /{alias}`.
const RESERVED_ALIASES: &[&str] = &["api", "health"];

/// Generates a random alias of [`ALIAS_LENGTH`] alphanumeric characters.
///
/// Drawn from the thread-local RNG; not predictable or sequential, which is
/// enough to avoid accidental collisions in a low-volume setting.
pub fn generate_alias() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(ALIAS_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-requested alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] naming the `alias` field if any rule
/// is violated.
pub fn validate_requested_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::invalid_input("alias", "must not be empty"));
    }

    if alias.len() > MAX_REQUESTED_LENGTH {
        return Err(AppError::invalid_input(
            "alias",
            format!("must be at most {MAX_REQUESTED_LENGTH} characters"),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::invalid_input(
            "alias",
            "may only contain letters, digits, hyphens, and underscores",
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::invalid_input("alias", "this alias is reserved"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_has_fixed_length() {
        let alias = generate_alias();
        assert_eq!(alias.len(), ALIAS_LENGTH);
    }

    #[test]
    fn test_generate_alias_is_alphanumeric() {
        let alias = generate_alias();
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_alias_produces_unique_aliases() {
        let mut aliases = HashSet::new();

        for _ in 0..1000 {
            aliases.insert(generate_alias());
        }

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_validate_simple_alias() {
        assert!(validate_requested_alias("docs").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_digits() {
        assert!(validate_requested_alias("a1B2c3").is_ok());
    }

    #[test]
    fn test_validate_hyphens_and_underscores() {
        assert!(validate_requested_alias("my-link_2024").is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_requested_alias("x").is_ok());
    }

    #[test]
    fn test_validate_empty_alias() {
        let result = validate_requested_alias("");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_REQUESTED_LENGTH + 1);
        assert!(validate_requested_alias(&alias).is_err());
    }

    #[test]
    fn test_validate_max_length_ok() {
        let alias = "a".repeat(MAX_REQUESTED_LENGTH);
        assert!(validate_requested_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_rejects_slash() {
        assert!(validate_requested_alias("a/b").is_err());
    }

    #[test]
    fn test_validate_rejects_spaces() {
        assert!(validate_requested_alias("my alias").is_err());
    }

    #[test]
    fn test_validate_rejects_unicode() {
        assert!(validate_requested_alias("café").is_err());
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            let result = validate_requested_alias(reserved);
            assert!(
                result.is_err(),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_validate_reserved_prefix_is_allowed() {
        assert!(validate_requested_alias("healthy").is_ok());
        assert!(validate_requested_alias("api2").is_ok());
    }
}
