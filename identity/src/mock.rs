//! In-memory identity provider for testing.

use crate::{AuthError, IdentityProvider, OAuthProvider, Session};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory implementation of [`IdentityProvider`] for tests.
#[derive(Clone, Default)]
pub struct MockIdentity {
    users: Arc<RwLock<HashMap<String, RegisteredUser>>>,
    fail_oauth: Arc<AtomicBool>,
}

#[derive(Clone)]
struct RegisteredUser {
    user_id: String,
    password: String,
    display_name: String,
}

impl MockIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a user so `sign_in` can succeed.
    pub fn with_user(self, email: &str, password: &str, display_name: &str) -> Self {
        {
            let mut users = self.users.write().expect("lock poisoned");
            users.insert(
                email.to_owned(),
                RegisteredUser {
                    user_id: uuid::Uuid::new_v4().to_string(),
                    password: password.to_owned(),
                    display_name: display_name.to_owned(),
                },
            );
        }
        self
    }

    /// Make OAuth sign-ins fail.
    pub fn fail_oauth(&self) {
        self.fail_oauth.store(true, Ordering::SeqCst);
    }
}

impl IdentityProvider for MockIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let users = self.users.read().expect("lock poisoned");
        let user = users.get(email).ok_or(AuthError::UserNotFound)?;
        if user.password != password {
            return Err(AuthError::WrongPassword);
        }
        Ok(Session {
            user_id: user.user_id.clone(),
            email: email.to_owned(),
            display_name: user.display_name.clone(),
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Session, AuthError> {
        let mut users = self.users.write().expect("lock poisoned");
        if users.contains_key(email) {
            return Err(AuthError::EmailAlreadyInUse);
        }
        let user = RegisteredUser {
            user_id: uuid::Uuid::new_v4().to_string(),
            password: password.to_owned(),
            display_name: display_name.to_owned(),
        };
        let session = Session {
            user_id: user.user_id.clone(),
            email: email.to_owned(),
            display_name: display_name.to_owned(),
        };
        users.insert(email.to_owned(), user);
        Ok(session)
    }

    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<Session, AuthError> {
        if self.fail_oauth.load(Ordering::SeqCst) {
            return Err(AuthError::Other(format!(
                "{} sign-in failed",
                provider.name()
            )));
        }
        Ok(Session {
            user_id: uuid::Uuid::new_v4().to_string(),
            email: format!("user@{}.example", provider.name().to_lowercase()),
            display_name: format!("{} User", provider.name()),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
