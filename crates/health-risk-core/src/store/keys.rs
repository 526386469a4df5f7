//! Per-user storage keys.

/// The independently persisted pieces of a user's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Vitals,
    Profile,
    Risk,
    Vaccines,
}

impl StoreKey {
    fn prefix(&self) -> &'static str {
        match self {
            StoreKey::Vitals => "vitals",
            StoreKey::Profile => "profile",
            StoreKey::Risk => "risk",
            StoreKey::Vaccines => "vaccines",
        }
    }

    /// Key for a user, e.g. `vitals_user-1`.
    pub fn for_user(&self, user_id: &str) -> String {
        format!("{}_{}", self.prefix(), user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scoped_keys() {
        assert_eq!(StoreKey::Vitals.for_user("u1"), "vitals_u1");
        assert_eq!(StoreKey::Risk.for_user("u1"), "risk_u1");
        assert_ne!(StoreKey::Profile.for_user("u1"), StoreKey::Profile.for_user("u2"));
    }
}
