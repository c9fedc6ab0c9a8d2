//! `smartstock-auth`: session boundary and sign-in / sign-up rules.
//!
//! This crate is intentionally decoupled from HTTP, storage and the identity
//! provider itself: the provider is reached only through [`SessionProvider`].

pub mod forms;
pub mod identity;
pub mod messages;
pub mod profile;
pub mod session;

pub use forms::{
    validate_reset_email, FieldError, FormErrors, FormField, SignInForm, SignUpForm,
    MIN_PASSWORD_LEN,
};
pub use identity::{initials_of, user_label};
pub use messages::{auth_error_message, AuthFlow, FALLBACK_MESSAGE};
pub use profile::{UserProfile, DEFAULT_ROLE};
pub use session::{
    InMemorySessionProvider, SessionError, SessionProvider, SessionUser, DASHBOARD_PATH,
    LOGIN_PATH,
};
