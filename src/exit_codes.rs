//! Exit code constants for the overlay-lint CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unreadable input)
//! - 2: Validation failure (syntax, duplicate key, overlay conflict)
//! - 3: Document not found under any extension
//! - 4: Internal invariant violated

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or unreadable input.
pub const USER_ERROR: i32 = 1;

/// Validation failure: malformed YAML, duplicated keys, or conflicting overlays.
pub const VALIDATION_FAILURE: i32 = 2;

/// No extension variant of a base path resolved to a readable file.
pub const NOT_FOUND: i32 = 3;

/// An internal invariant was broken (a bug in overlay-lint, not in the document).
pub const INTERNAL: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, NOT_FOUND, INTERNAL];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(VALIDATION_FAILURE, 2);
    }
}
