use serde::{Deserialize, Serialize};

/// What happens to a list's items and invitations when the list is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListDeletionPolicy {
    /// Only the list record is removed; items and invitations stay orphaned.
    #[default]
    KeepChildren,
    /// Items and invitations are removed before the list.
    Cascade,
}

impl std::fmt::Display for ListDeletionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListDeletionPolicy::KeepChildren => write!(f, "keep_children"),
            ListDeletionPolicy::Cascade => write!(f, "cascade"),
        }
    }
}

impl std::str::FromStr for ListDeletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep_children" => Ok(ListDeletionPolicy::KeepChildren),
            "cascade" => Ok(ListDeletionPolicy::Cascade),
            _ => Err(format!("Invalid list deletion policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_keeping_children() {
        assert_eq!(ListDeletionPolicy::default(), ListDeletionPolicy::KeepChildren);
    }

    #[test]
    fn should_parse_display_form() {
        for policy in [ListDeletionPolicy::KeepChildren, ListDeletionPolicy::Cascade] {
            assert_eq!(policy.to_string().parse::<ListDeletionPolicy>(), Ok(policy));
        }
        assert!("sometimes".parse::<ListDeletionPolicy>().is_err());
    }
}
