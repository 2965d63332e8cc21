//! Session context.
//!
//! An explicit, passed-down object holding the authenticated user and bearer
//! token. Reads and `clear` are pure operations over the context; there is no
//! ambient singleton and nothing is persisted across process lifetimes.

use crate::models::LoginResponse;

/// Profile of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

/// Authentication state for one client instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: UserData,
    token: Option<String>,
}

impl Session {
    /// An unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from a successful login response.
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            user: UserData {
                name: response.name.clone(),
                email: response.email.clone(),
                phone: response.phone.clone(),
                role: response.role.clone(),
            },
            token: Some(response.token.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.user.role.as_deref()
    }

    pub fn user(&self) -> &UserData {
        &self.user
    }

    /// Drop the token and profile, returning to the unauthenticated state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_response() -> LoginResponse {
        LoginResponse {
            token: "jwt-token".to_string(),
            name: Some("Admin".to_string()),
            email: Some("admin@example.com".to_string()),
            phone: None,
            role: Some("ADMIN".to_string()),
        }
    }

    #[test]
    fn test_from_login() {
        let session = Session::from_login(&login_response());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("jwt-token"));
        assert_eq!(session.role(), Some("ADMIN"));
        assert_eq!(session.user().email.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::from_login(&login_response());
        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), None);
    }
}
