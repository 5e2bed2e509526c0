//! Bearer credential for the Outlook REST API

use std::fmt;

/// Access token bound to the mailbox it authenticates as
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Mailbox address the token was issued for
    email: String,
    /// OAuth2 access token
    access_token: String,
}

impl Credential {
    /// Create a new credential
    pub fn new(email: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            access_token: access_token.into(),
        }
    }

    /// Get the email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Whether there is a token to send at all
    pub fn has_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let cred = Credential::new("user@outlook.com", "EwBwA8l6BAAU");
        assert_eq!(cred.authorization_header(), "Bearer EwBwA8l6BAAU");
        assert!(cred.has_token());
    }

    #[test]
    fn test_empty_token() {
        let cred = Credential::new("user@outlook.com", "");
        assert!(!cred.has_token());
    }

    #[test]
    fn test_debug_redacts_token() {
        let cred = Credential::new("user@outlook.com", "secret-token");
        let shown = format!("{:?}", cred);
        assert!(shown.contains("user@outlook.com"));
        assert!(!shown.contains("secret-token"));
    }
}
