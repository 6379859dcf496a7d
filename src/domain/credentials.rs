//! Admin credential verification.
//!
//! The gate is a capability trait so the service never compares
//! credentials itself. [`StaticCredentials`] is the single-tenant default
//! configured from the environment.

use std::fmt;

use subtle::ConstantTimeEq;

/// Default admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "1";

/// Default admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "1";

/// Decides whether a username/password pair is granted admin access.
pub trait CredentialVerifier: Send + Sync + fmt::Debug {
    /// Returns `true` if the pair is accepted.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed username/password pair.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Creates a verifier accepting exactly this pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // Evaluate both so timing does not reveal which half mismatched.
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        (user_ok & pass_ok).into()
    }
}
