//! The state owned by the demo, kept separate from the view so the business
//! rules can be tested without a DOM.

/// Number of times the increment button has been activated since mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    value: u32,
}

impl Count {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }
}

/// The two known form fields. Using an enum instead of a string key means an
/// unknown or missing field is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    Email,
}

/// The form record: both fields always exist, defaulting to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    email: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::Email => &self.email,
        }
    }

    /// Replaces the named field, leaving the other one untouched. Any string
    /// is accepted verbatim, including the empty string.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::Email => self.email = value,
        }
    }
}
