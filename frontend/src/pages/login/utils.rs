use crate::utils::validation;

/// First validation failure wins; the form surfaces one message at a time.
pub fn validate_credentials(email: &str, password: &str) -> Option<String> {
    if let Some(err) = validation::email_error(email) {
        return Some(err);
    }
    validation::password_error(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_pass() {
        assert!(validate_credentials("aissatou@simplon.co", "S3cret!mot").is_none());
    }

    #[test]
    fn email_shape_is_checked_first() {
        let err = validate_credentials("pas-un-email", "S3cret!mot");
        assert!(err.is_some());
    }

    #[test]
    fn weak_password_is_rejected() {
        assert!(validate_credentials("aissatou@simplon.co", "court").is_some());
    }
}
