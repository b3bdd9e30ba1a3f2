//! Password-change forms.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Validation rules bound to a password-change view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChangeForm {
    Standard,
    Strict,
}

/// Urlencoded body of a password-change POST.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChangeSubmission {
    pub new_password1: String,
    pub new_password2: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Lowercase => "a lowercase letter",
            CharClass::Uppercase => "an uppercase letter",
            CharClass::Digit => "a digit",
            CharClass::Symbol => "a symbol",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the two password fields didn't match")]
    Mismatch,

    #[error("password must be at least {0} characters long")]
    TooShort(usize),

    #[error("password can't be entirely numeric")]
    EntirelyNumeric,

    #[error("password must contain {0}")]
    Missing(CharClass),
}

impl PasswordChangeForm {
    pub fn name(&self) -> &'static str {
        match self {
            PasswordChangeForm::Standard => "PasswordChangeForm",
            PasswordChangeForm::Strict => "StrictPasswordChangeForm",
        }
    }

    pub fn min_length(&self) -> usize {
        match self {
            PasswordChangeForm::Standard => 8,
            PasswordChangeForm::Strict => 12,
        }
    }

    /// Check a submission, reporting every failed rule.
    pub fn validate(&self, submission: &PasswordChangeSubmission) -> Result<(), Vec<FormError>> {
        let password = submission.new_password1.as_str();
        let mut errors = Vec::new();

        if password != submission.new_password2 {
            errors.push(FormError::Mismatch);
        }
        if password.chars().count() < self.min_length() {
            errors.push(FormError::TooShort(self.min_length()));
        }

        match self {
            PasswordChangeForm::Standard => {
                if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
                    errors.push(FormError::EntirelyNumeric);
                }
            }
            PasswordChangeForm::Strict => {
                let checks: [(CharClass, fn(char) -> bool); 4] = [
                    (CharClass::Lowercase, char::is_lowercase),
                    (CharClass::Uppercase, char::is_uppercase),
                    (CharClass::Digit, |c| c.is_ascii_digit()),
                    (CharClass::Symbol, |c| !c.is_alphanumeric()),
                ];
                for (class, present) in checks {
                    if !password.chars().any(present) {
                        errors.push(FormError::Missing(class));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(p1: &str, p2: &str) -> PasswordChangeSubmission {
        PasswordChangeSubmission {
            new_password1: p1.to_string(),
            new_password2: p2.to_string(),
        }
    }

    #[test]
    fn test_standard_form() {
        let form = PasswordChangeForm::Standard;
        assert_eq!(form.validate(&submit("correcthorse", "correcthorse")), Ok(()));
        assert_eq!(
            form.validate(&submit("1234567", "1234568")),
            Err(vec![FormError::Mismatch, FormError::TooShort(8), FormError::EntirelyNumeric])
        );
    }

    #[test]
    fn test_strict_form_requires_character_classes() {
        let form = PasswordChangeForm::Strict;
        assert_eq!(form.validate(&submit("Tr0ub4dor&3xyz", "Tr0ub4dor&3xyz")), Ok(()));
        assert_eq!(
            form.validate(&submit("correcthorsebattery", "correcthorsebattery")),
            Err(vec![
                FormError::Missing(CharClass::Uppercase),
                FormError::Missing(CharClass::Digit),
                FormError::Missing(CharClass::Symbol),
            ])
        );
    }

    #[test]
    fn test_strict_form_is_stricter_than_standard() {
        let weak = submit("password1", "password1");
        assert!(PasswordChangeForm::Standard.validate(&weak).is_ok());
        assert!(PasswordChangeForm::Strict.validate(&weak).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Missing(CharClass::Symbol).to_string(), "password must contain a symbol");
        assert_eq!(FormError::TooShort(12).to_string(), "password must be at least 12 characters long");
    }
}
