//! Display helpers for the signed-in user.

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Display name, then email, then `"User"`.
pub fn user_label(display_name: Option<&str>, email: Option<&str>) -> String {
    non_blank(display_name)
        .or_else(|| non_blank(email))
        .unwrap_or("User")
        .to_string()
}

/// Up to two uppercase initials taken from the display name (or email).
///
/// The source is split on runs of anything that is not a letter or digit;
/// the first character of the first two parts is used. Falls back to `"U"`.
pub fn initials_of(display_name: Option<&str>, email: Option<&str>) -> String {
    let source = non_blank(display_name).or_else(|| non_blank(email)).unwrap_or("");

    let initials: String = source
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "U".to_string()
    } else {
        initials.chars().take(2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_display_name() {
        assert_eq!(user_label(Some("Ana"), Some("ana@x.io")), "Ana");
        assert_eq!(user_label(Some("  "), Some("ana@x.io")), "ana@x.io");
        assert_eq!(user_label(None, None), "User");
    }

    #[test]
    fn initials_from_name_or_email() {
        assert_eq!(initials_of(Some("jane doe"), None), "JD");
        assert_eq!(initials_of(Some("Cher"), None), "C");
        assert_eq!(initials_of(None, Some("bob.lee@example.com")), "BL");
        assert_eq!(initials_of(Some("élodie durand"), None), "ÉD");
        assert_eq!(initials_of(Some("--"), None), "U");
        assert_eq!(initials_of(None, None), "U");
    }

    #[test]
    fn initials_never_exceed_two_chars() {
        assert_eq!(initials_of(Some("ßtraße weg"), None), "SS");
    }
}
