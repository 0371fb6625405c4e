//! Boolean field coercion.
//!
//! The contract is deliberately strict: only the exact literal `True` is
//! true. `true`, `TRUE`, `" True"`, `1` and `yes` are all false. Values other
//! than `True`, `False` and blank are reported as non-canonical so that
//! upstream data problems stay visible.

use jobs_model::TRUE_LITERAL;

const FALSE_LITERAL: &str = "False";

/// Returns true only for the exact string `True`.
pub fn parse_flag(value: &str) -> bool {
    value == TRUE_LITERAL
}

/// Returns true for `True`, `False` and the empty string.
pub fn is_canonical_flag(value: &str) -> bool {
    value.is_empty() || value == TRUE_LITERAL || value == FALSE_LITERAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_literal_only() {
        assert!(parse_flag("True"));
        assert!(!parse_flag("False"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn case_variants_are_false() {
        assert!(!parse_flag("true"));
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag(" True"));
        assert!(!parse_flag("True "));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn canonical_tokens() {
        assert!(is_canonical_flag("True"));
        assert!(is_canonical_flag("False"));
        assert!(is_canonical_flag(""));
        assert!(!is_canonical_flag("true"));
        assert!(!is_canonical_flag("No"));
    }
}
