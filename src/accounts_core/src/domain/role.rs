use serde::{Deserialize, Serialize};

/// A role row. Seeded at bootstrap and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl Role {
    /// Role code as carried in session claims.
    pub fn session_code(&self) -> String {
        self.code.to_lowercase()
    }
}

/// The well-known role categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTier {
    Admin,
    Customer,
}

impl RoleTier {
    pub const ALL: [RoleTier; 2] = [RoleTier::Admin, RoleTier::Customer];

    pub fn code(self) -> &'static str {
        match self {
            RoleTier::Admin => "ADMIN",
            RoleTier::Customer => "CUSTOMER",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoleTier::Admin => "Administrator",
            RoleTier::Customer => "Customer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_code_is_lowercased() {
        let role = Role {
            id: 2,
            code: "CUSTOMER".to_string(),
            name: "Customer".to_string(),
        };
        assert_eq!(role.session_code(), "customer");
    }
}
