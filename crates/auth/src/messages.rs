//! User-facing messages for identity-provider error codes.

use serde::{Deserialize, Serialize};

pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Which form the error came from; the same code reads differently per flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFlow {
    SignIn,
    SignUp,
}

/// Map a provider error code (e.g. `auth/wrong-password`) to a message.
pub fn auth_error_message(flow: AuthFlow, code: &str) -> &'static str {
    let code = code.trim();
    let mapped = match flow {
        AuthFlow::SignIn => match code {
            "auth/invalid-credential" => Some("Invalid email or password."),
            "auth/user-not-found" => Some("No account found with that email."),
            "auth/wrong-password" => Some("Incorrect password."),
            "auth/too-many-requests" => Some("Too many attempts. Try again later."),
            "auth/network-request-failed" => Some("Network error. Check your connection."),
            "auth/popup-closed-by-user" => Some("Sign-in popup was closed."),
            _ => None,
        },
        AuthFlow::SignUp => match code {
            "auth/email-already-in-use" => Some("That email is already in use."),
            "auth/invalid-email" => Some("Enter a valid email."),
            "auth/weak-password" => Some("Password is too weak."),
            "auth/network-request-failed" => Some("Network error. Check your connection."),
            "auth/popup-closed-by-user" => Some("Google popup was closed."),
            _ => None,
        },
    };

    mapped.unwrap_or_else(|| {
        tracing::debug!(?flow, code, "unmapped auth error code");
        FALLBACK_MESSAGE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes_per_flow() {
        assert_eq!(
            auth_error_message(AuthFlow::SignIn, "auth/wrong-password"),
            "Incorrect password."
        );
        assert_eq!(
            auth_error_message(AuthFlow::SignUp, "auth/weak-password"),
            "Password is too weak."
        );
        assert_eq!(
            auth_error_message(AuthFlow::SignIn, "auth/popup-closed-by-user"),
            "Sign-in popup was closed."
        );
        assert_eq!(
            auth_error_message(AuthFlow::SignUp, "auth/popup-closed-by-user"),
            "Google popup was closed."
        );
    }

    #[test]
    fn unknown_or_cross_flow_codes_fall_back() {
        assert_eq!(auth_error_message(AuthFlow::SignIn, "auth/weak-password"), FALLBACK_MESSAGE);
        assert_eq!(auth_error_message(AuthFlow::SignUp, ""), FALLBACK_MESSAGE);
    }
}
