/// True when the last label of `domain` is an alphabetic TLD of two or more
/// characters. Case-insensitive.
pub fn has_valid_tld(domain: &str) -> bool {
    if domain.is_empty() || domain.len() < 3 || !domain.contains('.') {
        return false;
    }

    if let Some(last_dot) = domain.rfind('.') {
        if last_dot == domain.len() - 1 {
            return false;
        }
        let tld = &domain[last_dot + 1..];
        tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    } else {
        false
    }
}

pub fn has_scheme(candidate: &str) -> bool {
    let lower = candidate.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Prepends `https://` to candidates written without a scheme, such as
/// `www.example.com` or `example.com/path`.
pub fn ensure_scheme(candidate: &str) -> String {
    if has_scheme(candidate) {
        candidate.to_string()
    } else {
        format!("https://{}", candidate)
    }
}

/// Strips sentence punctuation glued to the end of a token.
pub fn strip_trailing_punctuation(token: &str) -> &str {
    token.trim_end_matches(['.', ',', ';', ':', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_valid_tld() {
        assert!(has_valid_tld("example.com"));
        assert!(has_valid_tld("Example.ORG"));
        assert!(!has_valid_tld("localhost"));
        assert!(!has_valid_tld("example."));
        assert!(!has_valid_tld("10.0.0.1"));
        assert!(!has_valid_tld("a.b"));
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(ensure_scheme("www.test.org"), "https://www.test.org");
        assert_eq!(ensure_scheme("http://a.io"), "http://a.io");
        assert_eq!(ensure_scheme("HTTPS://a.io"), "HTTPS://a.io");
    }

    #[test]
    fn test_strip_trailing_punctuation() {
        assert_eq!(strip_trailing_punctuation("https://a.io/x?!.,"), "https://a.io/x");
        assert_eq!(strip_trailing_punctuation("https://a.io/?q=1"), "https://a.io/?q=1");
        assert_eq!(strip_trailing_punctuation("..."), "");
    }
}
