//! Decide which tokens are counted.

use crate::exclusion::ExclusionSet;

/// Tokens that parse as an unsigned integer below this value are rejected.
///
/// Digits are already turned into spaces by the tokenizer, so this only
/// matters for tokens produced some other way.
pub const NUMERIC_EXCLUSION_LIMIT: u32 = 100;

/// Return `true` if `token` should be added to the bag.
///
/// A token is countable when it is non-empty, not excluded, and not a small
/// integer.
pub fn valid(token: &str, exclusions: &ExclusionSet) -> bool {
    !token.is_empty() && !exclusions.contains(token) && !is_small_integer(token)
}

fn is_small_integer(token: &str) -> bool {
    token
        .parse::<u32>()
        .is_ok_and(|n| n < NUMERIC_EXCLUSION_LIMIT)
}

/// A [`valid`] predicate bound to one exclusion set.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    exclusions: &'a ExclusionSet,
}

impl<'a> Validator<'a> {
    /// Bind a validator to `exclusions`.
    pub const fn new(exclusions: &'a ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// See [`valid`].
    pub fn accepts(&self, token: &str) -> bool {
        valid(token, self.exclusions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert!(!valid("", &ExclusionSet::default()));
    }

    #[test]
    fn rejects_excluded() {
        let exclusions = ExclusionSet::parse("the,and");
        assert!(!valid("the", &exclusions));
        assert!(valid("cat", &exclusions));
    }

    #[test]
    fn exclusion_is_case_sensitive() {
        let exclusions = ExclusionSet::parse("The");
        assert!(valid("the", &exclusions));
        assert!(!valid("The", &exclusions));
    }

    #[test]
    fn small_integers_rejected() {
        let none = ExclusionSet::default();
        assert!(!valid("0", &none));
        assert!(!valid("42", &none));
        assert!(!valid("99", &none));
        assert!(valid("100", &none));
        assert!(valid("1999", &none));
        assert!(valid("-5", &none));
    }

    #[test]
    fn validator_matches_free_function() {
        let exclusions = ExclusionSet::parse("a,an");
        let validator = Validator::new(&exclusions);
        for token in ["a", "an", "", "7", "word"] {
            assert_eq!(validator.accepts(token), valid(token, &exclusions), "{token}");
        }
    }
}
