//! Staff model.
//!
//! Staff members teach subjects. The scheduler only ever refers to them
//! by id; the remaining fields are contact details carried for display.

use serde::{Deserialize, Serialize};

/// A member of teaching staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Contact email.
    pub email: String,
    /// Owning department.
    pub department: String,
}

impl Staff {
    /// Creates a staff member with the given ID and empty details.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            phone_number: String::new(),
            email: String::new(),
            department: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}
