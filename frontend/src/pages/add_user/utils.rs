use crate::api::Role;
use crate::utils::validation;

/// First failure wins; the messages match the form's field rules.
pub fn new_user_error(
    name: &str,
    email: &str,
    phone: &str,
    role: Option<Role>,
) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Le champ ne peut pas être vide.".to_string());
    }
    if email.trim().is_empty() {
        return Some("L'email est requis.".to_string());
    }
    if validation::email_error(email).is_some() {
        return Some("L'email n'est pas valide.".to_string());
    }
    if phone.trim().is_empty() {
        return Some("Le numéro de téléphone est requis.".to_string());
    }
    if validation::phone_error(phone).is_some() {
        return Some("Numéro de téléphone invalide pour le pays.".to_string());
    }
    if role.is_none() {
        return Some("Veuillez sélectionner un rôle.".to_string());
    }
    None
}
