use percent_encoding::percent_decode_str;

/// Extracts a query parameter from a raw search string (`?a=1&b=2`),
/// decoded the way `URLSearchParams` would (`+` is a space).
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let trimmed = search.strip_prefix('?').unwrap_or(search);
    for pair in trimmed.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?;
        if key == name {
            let value = parts.next().unwrap_or("");
            if value.is_empty() {
                return None;
            }
            let spaced = value.replace('+', " ");
            let decoded = percent_decode_str(&spaced)
                .decode_utf8()
                .map(|cow| cow.into_owned())
                .unwrap_or(spaced);
            return Some(decoded);
        }
    }
    None
}

/// Second segment of a `/reset-password/<token>` path, when non-empty.
pub fn reset_password_token(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if segments.next() != Some("reset-password") {
        return None;
    }
    segments.next().map(|token| token.to_string())
}

pub fn is_reset_password_path(path: &str) -> bool {
    path.split('/').filter(|s| !s.is_empty()).next() == Some("reset-password")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_reads_token() {
        assert_eq!(query_param("?t=abc123", "t").as_deref(), Some("abc123"));
        assert_eq!(
            query_param("?lang=fr&t=abc123", "t").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn query_param_percent_decodes_the_value() {
        assert_eq!(
            query_param("?t=abc%2B1%3D2", "t").as_deref(),
            Some("abc+1=2")
        );
        assert_eq!(
            query_param("?name=Aissatou+Bah", "name").as_deref(),
            Some("Aissatou Bah")
        );
    }

    #[test]
    fn empty_or_missing_token_is_none() {
        assert!(query_param("", "t").is_none());
        assert!(query_param("?t=", "t").is_none());
        assert!(query_param("?other=1", "t").is_none());
    }

    #[test]
    fn reset_token_requires_second_segment() {
        assert_eq!(
            reset_password_token("/reset-password/tok-1").as_deref(),
            Some("tok-1")
        );
        assert!(reset_password_token("/reset-password").is_none());
        assert!(reset_password_token("/reset-password/").is_none());
        assert!(reset_password_token("/login").is_none());
    }

    #[test]
    fn reset_path_recognition() {
        assert!(is_reset_password_path("/reset-password/tok-1"));
        assert!(is_reset_password_path("/reset-password"));
        assert!(!is_reset_password_path("/accueil"));
    }
}
