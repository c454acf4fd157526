//! Registration form values and per-field interaction state

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::validation::{FieldError, ValidationErrors, validate, validate_field};

/// One of the five user-entered registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Input name, matching the JSON key the backend uses
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
        }
    }

    /// HTML input type
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
            Field::FirstName | Field::LastName => "text",
        }
    }
}

/// Raw registration values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// True when every field passes validation
    pub fn is_submittable(&self) -> bool {
        validate(self).is_empty()
    }
}

/// Form values together with which fields the user has touched.
///
/// Errors for untouched fields are computed but never shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: RegistrationForm,
    touched: BTreeSet<Field>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &RegistrationForm {
        &self.values
    }

    /// Update a field from user input. Editing a field touches it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.touched.insert(field);
    }

    /// Mark a field as interacted with (e.g. on blur)
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Mark every field as touched, used on a submit attempt
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> ValidationErrors {
        validate(&self.values)
    }

    /// Error to display for a field, hidden until the field is touched
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if !self.is_touched(field) {
            return None;
        }
        validate_field(&self.values, field).err()
    }

    pub fn is_submittable(&self) -> bool {
        self.values.is_submittable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set(Field::FirstName, "Ada");
        form.set(Field::LastName, "Lovelace");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Password, "secret");
        form.set(Field::ConfirmPassword, "secret");
        form
    }

    #[test]
    fn test_new_form_is_empty_and_untouched() {
        let form = FormState::new();
        assert_eq!(form.values(), &RegistrationForm::default());
        for field in Field::ALL {
            assert!(!form.is_touched(field));
        }
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_untouched_invalid_field_shows_no_error() {
        let form = FormState::new();
        assert!(!form.errors().is_empty());
        for field in Field::ALL {
            assert_eq!(form.visible_error(field), None);
        }
    }

    #[test]
    fn test_editing_touches_the_field() {
        let mut form = FormState::new();
        form.set(Field::Email, "not-an-email");

        assert!(form.is_touched(Field::Email));
        assert_eq!(
            form.visible_error(Field::Email),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(form.visible_error(Field::FirstName), None);
    }

    #[test]
    fn test_blur_touches_without_editing() {
        let mut form = FormState::new();
        form.touch(Field::LastName);
        assert_eq!(
            form.visible_error(Field::LastName),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn test_touch_all_reveals_every_error() {
        let mut form = FormState::new();
        form.touch_all();
        for field in Field::ALL {
            assert_eq!(form.visible_error(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_filled_form_is_submittable() {
        let form = filled();
        assert!(form.is_submittable());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_clearing_a_field_blocks_submission() {
        let mut form = filled();
        form.set(Field::Password, "");
        assert!(!form.is_submittable());
        assert_eq!(
            form.visible_error(Field::Password),
            Some(FieldError::Required)
        );
        // confirm no longer matches either
        assert_eq!(
            form.visible_error(Field::ConfirmPassword),
            Some(FieldError::Mismatch)
        );
    }

    #[test]
    fn test_field_names_match_wire_keys() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            ["firstName", "lastName", "email", "password", "confirmPassword"]
        );
        assert_eq!(Field::ConfirmPassword.input_type(), "password");
        assert_eq!(Field::Email.input_type(), "email");
    }
}
