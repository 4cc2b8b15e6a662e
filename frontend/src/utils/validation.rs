//! Field-level validation rules shared by the credential forms. Messages are
//! the ones users see, so they stay in French.

pub fn email_error(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email requis".to_string());
    }
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Some("Email invalide".to_string());
    }
    None
}

pub fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Le mot de passe est obligatoire".to_string());
    }
    if password.chars().count() < 8 {
        return Some("Le mot de passe doit comporter au moins 8 caractères".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Doit inclure au moins une lettre minuscule".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Doit inclure au moins une lettre majuscule".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Doit inclure au moins un chiffre".to_string());
    }
    if !password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)) {
        return Some("Doit inclure un caractère spécial".to_string());
    }
    None
}

pub fn confirmation_error(password: &str, confirmation: &str) -> Option<String> {
    if confirmation.is_empty() {
        return Some("Confirmation du mot de passe obligatoire".to_string());
    }
    if password != confirmation {
        return Some("Les mots de passe ne correspondent pas".to_string());
    }
    None
}

/// Strength first, then the confirmation; one message at a time.
pub fn new_password_error(password: &str, confirmation: &str) -> Option<String> {
    if let Some(err) = password_error(password) {
        return Some(err);
    }
    confirmation_error(password, confirmation)
}

pub fn phone_error(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Some("Le numéro de téléphone est requis".to_string());
    }
    let digits = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();
    let well_formed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-');
    if digits < 6 || !well_formed {
        return Some("Numéro de téléphone invalide".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(email_error("").is_some());
        assert!(email_error("pas-un-email").is_some());
        assert!(email_error("a@b").is_some());
        assert!(email_error("etudiant@simplon.co").is_none());
    }

    #[test]
    fn password_rules_cover_each_class() {
        assert!(password_error("").is_some());
        assert!(password_error("Ab1!").is_some()); // too short
        assert!(password_error("abcdefg1!").is_some()); // no uppercase
        assert!(password_error("ABCDEFG1!").is_some()); // no lowercase
        assert!(password_error("Abcdefgh!").is_some()); // no digit
        assert!(password_error("Abcdefg1").is_some()); // no special
        assert!(password_error("Abcdefg1!").is_none());
    }

    #[test]
    fn confirmation_must_match() {
        assert!(confirmation_error("Abcdefg1!", "").is_some());
        assert!(confirmation_error("Abcdefg1!", "autre").is_some());
        assert!(confirmation_error("Abcdefg1!", "Abcdefg1!").is_none());
    }

    #[test]
    fn new_password_checks_strength_before_confirmation() {
        assert!(new_password_error("court", "autre").is_some());
        assert!(new_password_error("Abcdefg1!", "autre").is_some());
        assert!(new_password_error("Abcdefg1!", "Abcdefg1!").is_none());
    }

    #[test]
    fn phone_rules() {
        assert!(phone_error("").is_some());
        assert!(phone_error("abc").is_some());
        assert!(phone_error("+224 620 00 00 00").is_none());
        assert!(phone_error("620000000").is_none());
    }
}
