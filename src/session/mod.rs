//! Session gate: decides whether the auth screens or the main tabs are shown.
//!
//! The gate starts out [`SessionState::Unknown`] while the stored user record
//! is read, then settles on one of the two other states. Having a stored
//! record counts as being logged in; nothing re-validates it with the server.

pub mod storage;

pub use storage::UserStore;

use crate::api::{AuthClient, User};
use crate::error::{AuthError, StorageError};
use tracing::{info, warn};

/// Where the user is in the auth flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Stored record not read yet. Only a loading view is shown.
    #[default]
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

#[derive(Debug, Default)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        self.state != SessionState::Unknown
    }

    /// Read the stored record and leave `Unknown`.
    ///
    /// Unreadable or corrupt records are logged and treated as "not logged
    /// in". Calling this from any other state does nothing.
    pub async fn resolve(&mut self, storage: &UserStore) -> &SessionState {
        if self.state != SessionState::Unknown {
            warn!("Ignoring session resolve: already {:?}", self.state);
            return &self.state;
        }

        self.state = match storage.load().await {
            Ok(Some(user)) => {
                warn!(
                    "Treating stored user {} as authenticated without server check",
                    user.username
                );
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                warn!("Could not read stored user, starting logged out: {}", e);
                SessionState::Unauthenticated
            }
        };
        info!("Session resolved: authenticated = {}", self.is_authenticated());
        &self.state
    }

    /// Log in remotely, store the user, then switch to `Authenticated`.
    ///
    /// On any failure neither storage nor state changes. When already
    /// authenticated the request is ignored and the current user returned.
    pub async fn login(
        &mut self,
        client: &AuthClient,
        storage: &UserStore,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if let SessionState::Authenticated(current) = &self.state {
            warn!("Ignoring login: already authenticated as {}", current.username);
            return Ok(current.clone());
        }

        let user = client.login(username, password).await?;
        storage.save(&user).await?;

        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Remove the stored user and switch to `Unauthenticated`.
    ///
    /// If removal fails the state is left as is and the error returned.
    pub async fn logout(&mut self, storage: &UserStore) -> Result<(), StorageError> {
        if !self.is_authenticated() {
            warn!("Ignoring logout: not authenticated ({:?})", self.state);
            return Ok(());
        }

        storage.clear().await?;
        info!("Logged out");
        self.state = SessionState::Unauthenticated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user() -> User {
        User {
            id: 3,
            username: "grace".to_string(),
            group: 1,
        }
    }

    #[tokio::test]
    async fn test_starts_unknown() {
        let gate = SessionGate::new();
        assert_eq!(gate.state(), &SessionState::Unknown);
        assert!(!gate.is_resolved());
    }

    #[tokio::test]
    async fn test_resolve_with_stored_user() {
        let temp_dir = TempDir::new().unwrap();
        let storage = UserStore::new(temp_dir.path().join("user.json"));
        storage.save(&user()).await.unwrap();

        let mut gate = SessionGate::new();
        gate.resolve(&storage).await;
        assert_eq!(gate.user(), Some(&user()));
    }

    #[tokio::test]
    async fn test_resolve_only_from_unknown() {
        let temp_dir = TempDir::new().unwrap();
        let storage = UserStore::new(temp_dir.path().join("user.json"));

        let mut gate = SessionGate::new();
        gate.resolve(&storage).await;
        assert_eq!(gate.state(), &SessionState::Unauthenticated);

        storage.save(&user()).await.unwrap();
        gate.resolve(&storage).await;
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage = UserStore::new(temp_dir.path().join("user.json"));
        storage.save(&user()).await.unwrap();

        let mut gate = SessionGate::new();
        gate.resolve(&storage).await;
        gate.logout(&storage).await.unwrap();
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_ignored_when_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let storage = UserStore::new(temp_dir.path().join("user.json"));
        let mut gate = SessionGate::new();
        gate.logout(&storage).await.unwrap();
        assert_eq!(gate.state(), &SessionState::Unknown);
    }
}
