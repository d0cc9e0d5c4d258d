pub use fast_chemail::is_valid_email;

use wayfinder_entities::email::EmailAddress;

/// Mail providers accepted for self-registration.
const ALLOWED_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "mail.ru",
    "example.org",
];

pub fn is_allowed_email_domain(email: &EmailAddress) -> bool {
    email
        .domain()
        .map(|domain| {
            ALLOWED_EMAIL_DOMAINS
                .iter()
                .any(|allowed| domain.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Strip anything from an uploaded file name that could escape
/// the uploads directory.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    let sanitized: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let trimmed = sanitized.trim_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_domain_allow_list() {
        let ok = "traveller@gmail.com".parse::<EmailAddress>().unwrap();
        let bad = "spam@tempmail.invalid".parse::<EmailAddress>().unwrap();
        assert!(is_allowed_email_domain(&ok));
        assert!(!is_allowed_email_domain(&bad));
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename("C:\\photos\\kazbegi view.jpg").as_deref(),
            Some("kazbegiview.jpg")
        );
        assert_eq!(sanitize_filename("sunset.png").as_deref(), Some("sunset.png"));
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename(""), None);
    }
}
