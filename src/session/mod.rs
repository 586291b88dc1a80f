//! Accounts, login and session tokens.
//!
//! Tokens are opaque. Customer and admin sessions share one table but every
//! resolve call states the role it needs, so an admin token is not accepted
//! where a customer is expected and vice versa.

use std::collections::HashMap;
use std::fmt;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Account, Credentials, Role};
use crate::error::AuthError;

/// Opaque session token handed out at login.
///
/// `Debug` hides the value, so tokens stay out of instrumented spans.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    accounts: HashMap<String, Account>,
    sessions: HashMap<SessionToken, Identity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account. Usernames are unique per role.
    pub fn register(&mut self, account: Account) -> Result<(), AuthError> {
        let taken = self
            .accounts
            .values()
            .any(|a| a.role == account.role && a.username == account.username);
        if taken || self.accounts.contains_key(&account.id) {
            return Err(AuthError::UsernameTaken(account.username));
        }
        info!(account_id = %account.id, role = %account.role, "Account registered");
        self.accounts.insert(account.id.clone(), account);
        Ok(())
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Checks credentials against accounts of `role` and opens a session.
    ///
    /// Unknown usernames, wrong passwords and inactive accounts all fail with
    /// the same [`AuthError::InvalidCredentials`].
    pub fn login(&mut self, credentials: &Credentials, role: Role) -> Result<SessionToken, AuthError> {
        let account = self
            .accounts
            .values()
            .find(|a| a.role == role && a.username == credentials.username)
            .filter(|a| a.is_active() && a.verify_password(&credentials.password))
            .ok_or_else(|| {
                warn!(username = %credentials.username, %role, "Login failed");
                AuthError::InvalidCredentials
            })?;

        let identity = Identity {
            account_id: account.id.clone(),
            role,
        };
        let token = SessionToken::generate();
        info!(account_id = %identity.account_id, %role, "Login successful");
        self.sessions.insert(token, identity);
        Ok(token)
    }

    pub fn resolve(&self, token: &SessionToken) -> Result<&Identity, AuthError> {
        self.sessions
            .get(token)
            .ok_or(AuthError::InvalidSession)
    }

    /// Resolves a customer session to the customer's account ID.
    pub fn resolve_customer(&self, token: &SessionToken) -> Result<String, AuthError> {
        self.resolve_role(token, Role::Customer)
    }

    /// Resolves an admin session to the admin's account ID.
    pub fn resolve_admin(&self, token: &SessionToken) -> Result<String, AuthError> {
        self.resolve_role(token, Role::Admin)
    }

    fn resolve_role(&self, token: &SessionToken, role: Role) -> Result<String, AuthError> {
        match self.resolve(token)? {
            identity if identity.role == role => Ok(identity.account_id.clone()),
            _ => Err(AuthError::InvalidSession),
        }
    }

    /// Ends a session. Unknown tokens are ignored.
    pub fn logout(&mut self, token: &SessionToken) {
        if let Some(identity) = self.sessions.remove(token) {
            info!(account_id = %identity.account_id, "Logged out");
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}
