use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Username pattern: a letter or underscore followed by letters, digits
    /// and underscores
    /// - Valid: "jdoe", "user123", "_admin"
    /// - Invalid: "123user", "j.doe", "j doe"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_regex_valid() {
        assert!(USERNAME_REGEX.is_match("jdoe"));
        assert!(USERNAME_REGEX.is_match("user123"));
        assert!(USERNAME_REGEX.is_match("_admin"));
        assert!(USERNAME_REGEX.is_match("JohnDoe"));
    }

    #[test]
    fn test_username_regex_invalid() {
        assert!(!USERNAME_REGEX.is_match("123user")); // starts with digit
        assert!(!USERNAME_REGEX.is_match("j.doe")); // dot
        assert!(!USERNAME_REGEX.is_match("user-name")); // hyphen
        assert!(!USERNAME_REGEX.is_match("j doe")); // space
        assert!(!USERNAME_REGEX.is_match("")); // empty
    }
}
