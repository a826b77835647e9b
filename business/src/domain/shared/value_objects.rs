use serde::{Deserialize, Serialize};

/// Identifier of a user as issued by the identity provider (opaque uid).
/// Lists, items and invitations reference users only through this value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the uid is empty or whitespace, i.e. no signed-in user.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Resolves an optional caller identity into a usable user id.
/// Blank ids are treated the same as a missing session.
pub fn authenticated(user_id: Option<UserId>) -> Option<UserId> {
    user_id.filter(|id| !id.is_blank())
}
