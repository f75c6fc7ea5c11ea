//! Validation of record names.

use crate::error::ParseError;

/// Which characters a name may contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// ASCII letters and spaces.
    #[default]
    LettersAndSpaces,
    /// ASCII letters only.
    LettersOnly,
}

impl NamePolicy {
    fn allows(self, c: char) -> bool {
        match self {
            NamePolicy::LettersAndSpaces => c.is_ascii_alphabetic() || c == ' ',
            NamePolicy::LettersOnly => c.is_ascii_alphabetic(),
        }
    }

    /// Checks a name against the policy. Empty names are always rejected.
    pub fn validate(self, name: &str) -> Result<(), ParseError> {
        if !name.is_empty() && name.chars().all(|c| self.allows(c)) {
            Ok(())
        } else {
            Err(ParseError::InvalidName(name.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NamePolicy;

    #[test]
    fn test_letters_and_spaces() {
        let policy = NamePolicy::default();
        assert!(policy.validate("Brandon").is_ok());
        assert!(policy.validate("Mary Ann").is_ok());
        assert!(policy.validate("").is_err());
        assert!(policy.validate("R2D2").is_err());
        assert!(policy.validate("O'Brien").is_err());
        assert!(policy.validate("Zoë").is_err());
    }

    #[test]
    fn test_letters_only() {
        let policy = NamePolicy::LettersOnly;
        assert!(policy.validate("Brandon").is_ok());
        assert!(policy.validate("Mary Ann").is_err());
        assert!(policy.validate("Brandon\t").is_err());
    }
}
