//! User directory state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Outcome of an [`TeamState::add`] attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Prompt to show the user; the roster is unchanged.
    Rejected(&'static str),
}

/// Roster of directory members, in insertion order.
#[derive(Debug, Default)]
pub struct TeamState {
    members: Vec<TeamMember>,
}

impl TeamState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Add a member. Both fields must be non-blank after trimming and the
    /// email must look like an address; otherwise the roster is unchanged
    /// and a prompt is returned.
    pub fn add(&mut self, name: &str, email: &str, role: Role) -> AddOutcome {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return AddOutcome::Rejected("Please fill all fields");
        }
        if !email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
        {
            return AddOutcome::Rejected("Please enter a valid email");
        }

        self.members.push(TeamMember {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
        });
        AddOutcome::Added
    }

    /// Change a member's role. Unknown ids are a no-op.
    pub fn update_role(&mut self, id: &str, role: Role) -> bool {
        let Some(member) = self.members.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        member.role = role;
        true
    }

    /// Remove a member by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(position) = self.members.iter().position(|m| m.id == id) else {
            return false;
        };
        self.members.remove(position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_with_fresh_id() {
        let mut state = TeamState::new();
        assert_eq!(state.add("Ada", "ada@example.com", Role::Admin), AddOutcome::Added);
        assert_eq!(state.add("Ben", "ben@example.com", Role::User), AddOutcome::Added);

        let members = state.members();
        assert_eq!(members.len(), 2);
        assert_ne!(members[0].id, members[1].id);
        assert_eq!(members[0].name, "Ada");
        assert_eq!(members[1].role, Role::User);
    }

    #[test]
    fn blank_fields_leave_roster_unchanged() {
        let mut state = TeamState::new();
        assert_eq!(
            state.add("  ", "ada@example.com", Role::User),
            AddOutcome::Rejected("Please fill all fields")
        );
        assert_eq!(
            state.add("Ada", "", Role::User),
            AddOutcome::Rejected("Please fill all fields")
        );
        assert!(state.members().is_empty());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut state = TeamState::new();
        assert_eq!(
            state.add("Ada", "not-an-email", Role::User),
            AddOutcome::Rejected("Please enter a valid email")
        );
        assert_eq!(
            state.add("Ada", "@example.com", Role::User),
            AddOutcome::Rejected("Please enter a valid email")
        );
        assert!(state.members().is_empty());
    }

    #[test]
    fn update_role_changes_one_member() {
        let mut state = TeamState::new();
        state.add("Ada", "ada@example.com", Role::User);
        let id = state.members()[0].id.clone();

        assert!(state.update_role(&id, Role::Admin));
        assert_eq!(state.members()[0].role, Role::Admin);
        assert!(!state.update_role("missing", Role::User));
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut state = TeamState::new();
        state.add("Ada", "ada@example.com", Role::User);
        let id = state.members()[0].id.clone();

        assert!(!state.remove("missing"));
        assert_eq!(state.members().len(), 1);
        assert!(state.remove(&id));
        assert!(state.members().is_empty());
    }

    #[test]
    fn role_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let round: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(round, Role::User);
    }
}
