//! Identity collaborator seam.
//!
//! The app never talks to the identity backend directly; everything goes
//! through [`IdentityProvider`]. A successful sign-in produces a
//! [`Session`] which is passed explicitly into whatever needs it — there is
//! no ambient signed-in-user global.

mod mock;

pub use mock::MockIdentity;

use serde::{Deserialize, Serialize};
use std::future::Future;

/// Authenticated session context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
}

/// Supported OAuth providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
        }
    }
}

/// Typed failure from the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credential")]
    InvalidCredential,

    #[error("email already in use")]
    EmailAlreadyInUse,

    #[error("user not found")]
    UserNotFound,

    #[error("wrong password")]
    WrongPassword,

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Short message suitable for showing directly to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredential => "Invalid email or password".to_owned(),
            Self::EmailAlreadyInUse => "Email is already in use".to_owned(),
            Self::UserNotFound => "User not found".to_owned(),
            Self::WrongPassword => "Wrong password".to_owned(),
            Self::Other(message) if !message.is_empty() => message.clone(),
            Self::Other(_) => "An error occurred".to_owned(),
        }
    }
}

/// Interface to the identity backend.
pub trait IdentityProvider: Clone + Send + Sync + 'static {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;

    fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;
}
