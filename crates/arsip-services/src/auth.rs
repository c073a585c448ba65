//! Login by selection from the fixed roster

use arsip_core::{seed, ArchiveError, ArchiveResult, Session, User};

/// Produces sessions for users. A real deployment would verify credentials
/// here; the demo roster only looks the user up.
pub trait Authenticator: Send + Sync {
    fn users(&self) -> &[User];

    fn login(&self, user_id: &str) -> ArchiveResult<Session>;
}

#[derive(Debug, Clone)]
pub struct FixedRoster {
    users: Vec<User>,
}

impl FixedRoster {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl Default for FixedRoster {
    fn default() -> Self {
        Self::new(seed::roster())
    }
}

impl Authenticator for FixedRoster {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn login(&self, user_id: &str) -> ArchiveResult<Session> {
        let user = self
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| ArchiveError::NotFound(format!("User {}", user_id)))?;

        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(Session::new(user))
    }
}
