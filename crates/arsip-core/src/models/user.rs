use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::{ArchiveError, ArchiveResult};

/// Role of a roster user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Staff,
    Public,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Staff => write!(f, "STAFF"),
            Role::Public => write!(f, "PUBLIC"),
        }
    }
}

/// Actions gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ViewDashboard,
    BrowseArchive,
    Upload,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::ViewDashboard,
        Action::BrowseArchive,
        Action::Upload,
        Action::Delete,
    ];
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Action::ViewDashboard => write!(f, "view the dashboard"),
            Action::BrowseArchive => write!(f, "browse the archive"),
            Action::Upload => write!(f, "upload"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Pure role check: may `role` perform `action`?
pub fn authorize(role: Role, action: Action) -> AccessDecision {
    let allowed = match action {
        Action::ViewDashboard | Action::BrowseArchive => true,
        Action::Upload => matches!(role, Role::Admin | Role::Staff),
        Action::Delete => role == Role::Admin,
    };

    if allowed {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

/// Logged-in user together with the capabilities granted by their role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    capabilities: BTreeSet<Action>,
}

impl Session {
    pub fn new(user: User) -> Self {
        let capabilities = Action::ALL
            .into_iter()
            .filter(|action| authorize(user.role, *action).is_allowed())
            .collect();
        Self { user, capabilities }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn capabilities(&self) -> impl Iterator<Item = Action> + '_ {
        self.capabilities.iter().copied()
    }

    pub fn can(&self, action: Action) -> bool {
        self.capabilities.contains(&action)
    }

    /// Fails with `Forbidden` unless the session may perform `action`
    pub fn require(&self, action: Action) -> ArchiveResult<()> {
        if self.can(action) {
            Ok(())
        } else {
            Err(ArchiveError::Forbidden {
                role: self.user.role.to_string(),
                action: action.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u0".to_string(),
            name: "Test".to_string(),
            role,
            avatar: String::new(),
        }
    }

    #[test]
    fn test_delete_is_admin_only() {
        assert_eq!(authorize(Role::Admin, Action::Delete), AccessDecision::Allow);
        assert_eq!(authorize(Role::Staff, Action::Delete), AccessDecision::Deny);
        assert_eq!(authorize(Role::Public, Action::Delete), AccessDecision::Deny);
    }

    #[test]
    fn test_public_cannot_upload() {
        assert!(authorize(Role::Staff, Action::Upload).is_allowed());
        assert!(!authorize(Role::Public, Action::Upload).is_allowed());
    }

    #[test]
    fn test_everyone_can_browse() {
        for role in [Role::Admin, Role::Staff, Role::Public] {
            assert!(authorize(role, Action::BrowseArchive).is_allowed());
            assert!(authorize(role, Action::ViewDashboard).is_allowed());
        }
    }

    #[test]
    fn test_session_capabilities_follow_role() {
        let session = Session::new(user(Role::Staff));
        let caps: Vec<Action> = session.capabilities().collect();
        assert_eq!(
            caps,
            vec![Action::ViewDashboard, Action::BrowseArchive, Action::Upload]
        );
        assert!(session.require(Action::Upload).is_ok());
        assert!(matches!(
            session.require(Action::Delete),
            Err(ArchiveError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Public).unwrap(), "\"PUBLIC\"");
    }
}
