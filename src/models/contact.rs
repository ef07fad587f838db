// src/models/contact.rs
// DOCUMENTATION: Contact page form
// PURPOSE: Validation rules for visitor messages

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Message submitted from the contact page. Not persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactForm {
    /// Field name to first error message, empty when the form is valid
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if let Err(e) = self.validate() {
            for (field, field_errors) in e.field_errors() {
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field));
                    errors.insert(field.to_string(), message);
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Radha".to_string(),
            email: "radha@example.com".to_string(),
            phone: "+91 9876543210".to_string(),
            message: "When is the Janmashtami aarti?".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
        assert!(valid_form().field_errors().is_empty());
    }

    #[test]
    fn test_field_errors() {
        let form = ContactForm {
            name: "R".to_string(),
            email: "not-an-email".to_string(),
            ..valid_form()
        };

        let errors = form.field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "Name must be at least 2 characters");
        assert_eq!(errors["email"], "Please enter a valid email address");
    }

    #[test]
    fn test_short_message_and_phone() {
        let form = ContactForm {
            phone: "12345".to_string(),
            message: "Hi".to_string(),
            ..valid_form()
        };

        let errors = form.field_errors();
        assert!(errors.contains_key("phone"));
        assert!(errors.contains_key("message"));
    }
}
