use serde::{Deserialize, Serialize};

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

/// Denormalized profile of a signed-in user, keyed by the identity provider uid.
/// Exists so that users can be looked up by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
}

impl User {
    pub fn new(
        id: UserId,
        email: String,
        name: String,
        photo_url: Option<String>,
    ) -> Result<Self, UserError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(UserError::EmailEmpty);
        }

        Ok(Self {
            id,
            email,
            name: name.trim().to_string(),
            photo_url: photo_url.filter(|url| !url.trim().is_empty()),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        email: String,
        name: String,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            photo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_profile_when_email_present() {
        let user = User::new(
            UserId::new("uid-1"),
            " alice@example.com ".to_string(),
            "Alice".to_string(),
            Some("https://img/alice.png".to_string()),
        )
        .unwrap();

        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.photo_url.as_deref(), Some("https://img/alice.png"));
    }

    #[test]
    fn should_reject_profile_when_email_blank() {
        let result = User::new(UserId::new("uid-1"), "  ".to_string(), "A".to_string(), None);

        assert!(matches!(result.unwrap_err(), UserError::EmailEmpty));
    }

    #[test]
    fn should_drop_blank_photo_url() {
        let user = User::new(
            UserId::new("uid-1"),
            "a@b.c".to_string(),
            "A".to_string(),
            Some(String::new()),
        )
        .unwrap();

        assert!(user.photo_url.is_none());
    }
}
