//! Authentication context for the admin panel.
//!
//! This is a demo credential gate, not a security boundary: one hard-coded
//! username/password pair checked in-process, with the session held in a
//! context signal for the lifetime of the page load. Logout drops the
//! session; nothing is persisted across reloads and there is no lockout or
//! rate limiting.

use dioxus::prelude::*;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password123";

/// The signed-in admin user.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub username: String,
}

/// Credential mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCredentials;

impl std::fmt::Display for InvalidCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid credentials. Please try again.")
    }
}

/// Check a submitted credential pair against the demo credential.
pub fn authenticate(username: &str, password: &str) -> Result<AdminUser, InvalidCredentials> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(AdminUser {
            username: username.to_string(),
        })
    } else {
        Err(InvalidCredentials)
    }
}

/// Session state for the admin application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AdminUser>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session signal.
/// Wrap the app with this component to enable the login gate.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credential_is_accepted() {
        let user = authenticate("admin", "password123").unwrap();
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn test_wrong_credentials_are_rejected() {
        assert!(authenticate("admin", "letmein").is_err());
        assert!(authenticate("root", "password123").is_err());
        assert_eq!(
            authenticate("", "").unwrap_err().to_string(),
            "Invalid credentials. Please try again."
        );
    }
}
