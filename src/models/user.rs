use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Singleton user record, overwritten wholesale on each save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub is_logged_in: bool,
}

impl User {
    /// Build a logged-in session from the login form. There is no backend;
    /// the display name is derived from the email's local part.
    pub fn from_login(email: &str, password: &str) -> Result<Self, ValidationError> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }

        let email = email.trim().to_string();
        let name = email.split('@').next().unwrap_or_default().to_string();

        Ok(Self {
            name,
            email,
            is_logged_in: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            User::from_login("", "secret").unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            User::from_login("ada@example.com", " ").unwrap_err(),
            ValidationError::MissingField
        );
    }

    #[test]
    fn name_comes_from_the_email_local_part() {
        let user = User::from_login("ada@example.com", "secret").unwrap();
        assert_eq!(user.name, "ada");
        assert!(user.is_logged_in);
    }
}
