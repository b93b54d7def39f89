//! Sign-in state machine over an identity collaborator.

use log::{info, warn};

use fileshare_identity::{AuthError, IdentityProvider, OAuthProvider, Session};

/// Form fields for email/password sign-in and registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err("Please fill all fields".to_owned());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    NotAuthenticated,
    Authenticating,
    Authenticated(Session),
    /// User-facing failure message.
    Failed(String),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, AuthStatus::Authenticating)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthStatus::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            AuthStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Authentication state for the current client.
#[derive(Debug, Default)]
pub struct LoginState {
    status: AuthStatus,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &AuthStatus {
        &self.status
    }

    /// Sign in with email and password. Blank fields fail fast without
    /// touching the provider.
    pub async fn sign_in<P: IdentityProvider>(&mut self, provider: &P, input: &LoginInput) {
        if let Err(message) = input.validate() {
            self.status = AuthStatus::Failed(message);
            return;
        }
        self.status = AuthStatus::Authenticating;
        match provider.sign_in(&input.email, &input.password).await {
            Ok(session) => {
                info!("signed in as {}", session.email);
                self.status = AuthStatus::Authenticated(session);
            }
            Err(err) => self.fail(err),
        }
    }

    /// Register a new account, then treat the returned session as signed in.
    pub async fn register<P: IdentityProvider>(
        &mut self,
        provider: &P,
        input: &LoginInput,
        display_name: &str,
    ) {
        if let Err(message) = input.validate() {
            self.status = AuthStatus::Failed(message);
            return;
        }
        if display_name.trim().is_empty() {
            self.status = AuthStatus::Failed("Please fill all fields".to_owned());
            return;
        }
        self.status = AuthStatus::Authenticating;
        match provider
            .sign_up(&input.email, &input.password, display_name)
            .await
        {
            Ok(session) => {
                info!("registered {}", session.email);
                self.status = AuthStatus::Authenticated(session);
            }
            Err(err) => self.fail(err),
        }
    }

    pub async fn sign_in_with_oauth<P: IdentityProvider>(
        &mut self,
        provider: &P,
        oauth: OAuthProvider,
    ) {
        self.status = AuthStatus::Authenticating;
        match provider.sign_in_with_oauth(oauth).await {
            Ok(session) => {
                info!("signed in via {} as {}", oauth.name(), session.email);
                self.status = AuthStatus::Authenticated(session);
            }
            Err(err) => self.fail(err),
        }
    }

    /// Sign out. The local status resets even if the provider call fails.
    pub async fn sign_out<P: IdentityProvider>(&mut self, provider: &P) {
        if let Err(err) = provider.sign_out().await {
            warn!("sign out failed: {err}");
        }
        self.status = AuthStatus::NotAuthenticated;
    }

    fn fail(&mut self, err: AuthError) {
        warn!("authentication failed: {err}");
        self.status = AuthStatus::Failed(err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_not_authenticated() {
        let state = LoginState::new();
        assert_eq!(*state.status(), AuthStatus::NotAuthenticated);
        assert!(!state.status().is_authenticated());
    }

    #[test]
    fn blank_input_fails_validation() {
        assert!(LoginInput::new("", "secret").validate().is_err());
        assert!(LoginInput::new("a@b.c", "  ").validate().is_err());
        assert!(LoginInput::new("a@b.c", "secret").validate().is_ok());
    }

    #[test]
    fn status_accessors() {
        let session = Session {
            user_id: "u1".to_owned(),
            email: "a@b.c".to_owned(),
            display_name: "A".to_owned(),
        };
        let status = AuthStatus::Authenticated(session.clone());
        assert!(status.is_authenticated());
        assert_eq!(status.session(), Some(&session));

        let failed = AuthStatus::Failed("nope".to_owned());
        assert_eq!(failed.failure_message(), Some("nope"));
        assert!(failed.session().is_none());
    }
}
