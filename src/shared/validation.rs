use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating admin e-mail addresses (case-insensitive)
    /// - Valid: "priya@societyhub.in", "ops.team+alerts@example.co"
    /// - Invalid: "priya", "priya@", "priya@host", "@host.com"
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("priya@societyhub.in"));
        assert!(EMAIL_REGEX.is_match("Ops.Team+alerts@Example.CO"));
        assert!(EMAIL_REGEX.is_match("a_b-c%d@mail.server.org"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("priya")); // no domain
        assert!(!EMAIL_REGEX.is_match("priya@")); // empty domain
        assert!(!EMAIL_REGEX.is_match("priya@host")); // no tld
        assert!(!EMAIL_REGEX.is_match("@host.com")); // empty local part
        assert!(!EMAIL_REGEX.is_match("priya@host.c")); // tld too short
        assert!(!EMAIL_REGEX.is_match("pri ya@host.com")); // space
        assert!(!EMAIL_REGEX.is_match("")); // empty
    }
}
