//! Validation rules for the registration form
//!
//! Each field is checked independently and reports at most one error: the
//! first rule it violates. `confirmPassword` is the only cross-field rule.

use std::collections::BTreeMap;

use email_address::{EmailAddress, Options};

use super::form::{Field, RegistrationForm};

/// Field-level validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Field is empty or only whitespace
    #[error("This field is required.")]
    Required,
    /// Email does not have standard `local@domain.tld` syntax
    #[error("Invalid email type.")]
    InvalidEmail,
    /// Password confirmation differs from the password
    #[error("Passwords must be matched.")]
    Mismatch,
}

/// Errors for the invalid fields of a form, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Invalid fields in display order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

/// Validate every field of the form
pub fn validate(form: &RegistrationForm) -> ValidationErrors {
    ValidationErrors(
        Field::ALL
            .into_iter()
            .filter_map(|field| validate_field(form, field).err().map(|e| (field, e)))
            .collect(),
    )
}

/// Validate a single field in the context of the whole form
pub fn validate_field(form: &RegistrationForm, field: Field) -> Result<(), FieldError> {
    let value = form.value(field);
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }

    match field {
        Field::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        Field::ConfirmPassword if value != form.password => Err(FieldError::Mismatch),
        _ => Ok(()),
    }
}

/// Bare address in standard email syntax with a mandatory top-level domain
pub fn is_valid_email(value: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_display_text();
    EmailAddress::parse_with_options(value, options).is_ok()
}
