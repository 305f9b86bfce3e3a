//! Form validation
//!
//! Pure checks over typed form input. Nothing here touches storage or UI.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::AccountType;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Minimum password length for new accounts
pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain.tld` shape: one `@`, no whitespace, a dot after the `@`
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// Sign-up form fields that can be flagged invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    AgreeTerms,
}

impl SignUpField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignUpField::FirstName => "firstName",
            SignUpField::LastName => "lastName",
            SignUpField::Email => "email",
            SignUpField::Phone => "phone",
            SignUpField::Password => "password",
            SignUpField::ConfirmPassword => "confirmPassword",
            SignUpField::AgreeTerms => "agreeTerms",
        }
    }
}

/// Why a form was rejected; the message is what the user sees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please correct the highlighted fields.")]
    SignUp { fields: Vec<SignUpField> },

    #[error("Please enter both email and password.")]
    MissingCredentials,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please fill in all contact fields.")]
    MissingContactFields,

    #[error("Please fill in both pickup and destination locations.")]
    MissingLocations,
}

impl ValidationError {
    /// Every field to highlight, empty for single-message errors
    pub fn invalid_fields(&self) -> &[SignUpField] {
        match self {
            ValidationError::SignUp { fields } => fields,
            _ => &[],
        }
    }
}

/// Registration input, collected once from the UI
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: AccountType,
    pub agree_terms: bool,
}

impl SignUpForm {
    /// Check every field and report all failures together
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();

        if self.first_name.trim().is_empty() {
            fields.push(SignUpField::FirstName);
        }
        if self.last_name.trim().is_empty() {
            fields.push(SignUpField::LastName);
        }
        if !is_valid_email(self.email.trim()) {
            fields.push(SignUpField::Email);
        }
        if self.phone.trim().is_empty() {
            fields.push(SignUpField::Phone);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            fields.push(SignUpField::Password);
        }
        if self.password != self.confirm_password {
            fields.push(SignUpField::ConfirmPassword);
        }
        if !self.agree_terms {
            fields.push(SignUpField::AgreeTerms);
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::SignUp { fields })
        }
    }
}

/// Login input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Contact form check
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if name.trim().is_empty() || email.is_empty() || message.trim().is_empty() {
        return Err(ValidationError::MissingContactFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Password reset needs nothing but a well-formed email
pub fn validate_reset_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Both ends of a ride must be filled in
pub fn validate_locations(origin: &str, destination: &str) -> Result<(), ValidationError> {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        Err(ValidationError::MissingLocations)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> SignUpForm {
        SignUpForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            phone: "555".into(),
            password: "abcdef".into(),
            confirm_password: "abcdef".into(),
            account_type: AccountType::Passenger,
            agree_terms: true,
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn empty_sign_up_flags_every_field() {
        let err = SignUpForm::default().validate().unwrap_err();
        let fields = err.invalid_fields();
        for field in [
            SignUpField::FirstName,
            SignUpField::LastName,
            SignUpField::Email,
            SignUpField::Phone,
            SignUpField::Password,
            SignUpField::AgreeTerms,
        ] {
            assert!(fields.contains(&field), "missing {}", field.as_str());
        }
        // Two empty passwords match each other
        assert!(!fields.contains(&SignUpField::ConfirmPassword));
        assert_eq!(err.to_string(), "Please correct the highlighted fields.");
    }

    #[test]
    fn valid_sign_up_passes() {
        assert_eq!(jane().validate(), Ok(()));
    }

    #[test]
    fn sign_up_accumulates_independent_failures() {
        let form = SignUpForm {
            password: "abc".into(),
            confirm_password: "abd".into(),
            agree_terms: false,
            ..jane()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.invalid_fields(),
            &[
                SignUpField::Password,
                SignUpField::ConfirmPassword,
                SignUpField::AgreeTerms
            ]
        );
    }

    #[test]
    fn whitespace_names_are_empty() {
        let form = SignUpForm {
            first_name: "   ".into(),
            ..jane()
        };
        assert_eq!(form.validate().unwrap_err().invalid_fields(), &[SignUpField::FirstName]);
    }

    #[test]
    fn login_checks() {
        let missing = LoginForm {
            email: "jane@x.com".into(),
            password: String::new(),
        };
        assert_eq!(missing.validate(), Err(ValidationError::MissingCredentials));

        let bad = LoginForm {
            email: "jane".into(),
            password: "pw".into(),
        };
        assert_eq!(bad.validate(), Err(ValidationError::InvalidEmail));

        let ok = LoginForm {
            email: " jane@x.com ".into(),
            password: "pw".into(),
        };
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn contact_checks() {
        assert_eq!(
            validate_contact("Jane", "", "hi"),
            Err(ValidationError::MissingContactFields)
        );
        assert_eq!(
            validate_contact("Jane", "jane@", "hi"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_contact("Jane", "jane@x.com", "hi"), Ok(()));
    }

    #[test]
    fn location_and_reset_checks() {
        assert_eq!(
            validate_locations("Maadi", "  "),
            Err(ValidationError::MissingLocations)
        );
        assert_eq!(validate_locations("Maadi", "Giza"), Ok(()));
        assert_eq!(validate_reset_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_reset_email("a@b.co"), Ok(()));
    }
}
