use super::repository::SetPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::utils::{timer, validation};
use leptos::*;
use std::rc::Rc;

pub const SUCCESS_MESSAGE: &str = "Mot de passe défini avec succès ! Redirection...";
pub const INVALID_LINK_MESSAGE: &str =
    "Votre lien a expiré ou vous avez déjà défini votre mot de passe. Demandez un nouveau lien ou connectez-vous.";

/// Display state of the one-time-link page, driven by verification then by
/// the save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Verifying,
    Valid,
    Invalid,
    AlreadyDefined,
    Done,
}

#[derive(Clone)]
pub struct SetPasswordViewModel {
    pub link_state: RwSignal<LinkState>,
    pub password: RwSignal<String>,
    pub confirmation: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub save_action: Action<(String, String, String), Result<MessageResponse, ApiError>>,
}

pub fn use_set_password_view_model(token: Signal<String>) -> SetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SetPasswordRepository::new_with_client(Rc::new(api));

    let link_state = create_rw_signal(LinkState::Verifying);
    let password = create_rw_signal(String::new());
    let confirmation = create_rw_signal(String::new());
    let error = create_rw_signal(None);

    let repo_for_verify = repository.clone();
    let verify_action = create_action(move |token: &String| {
        let repo = repo_for_verify.clone();
        let token = token.clone();
        async move { repo.verify_token(token).await }
    });

    // One verification per mount; the gate guarantees the token is non-empty.
    create_effect(move |already_dispatched: Option<bool>| {
        if already_dispatched.unwrap_or(false) {
            return true;
        }
        verify_action.dispatch(token.get());
        true
    });

    create_effect(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(_) => link_state.set(LinkState::Valid),
                Err(_) => link_state.set(LinkState::Invalid),
            }
        }
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(
        move |(token, password, confirmation): &(String, String, String)| {
            let repo = repo_for_save.clone();
            let token = token.clone();
            let password = password.clone();
            let confirmation = confirmation.clone();
            async move {
                if let Some(message) = validation::new_password_error(&password, &confirmation) {
                    return Err(ApiError::validation(message));
                }
                repo.save_password(token, password).await
            }
        },
    );

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    link_state.set(LinkState::Done);
                    timer::redirect_after("/login", timer::REDIRECT_DELAY_MILLIS);
                }
                Err(err) if err.is_forbidden() => {
                    error.set(None);
                    link_state.set(LinkState::AlreadyDefined);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    SetPasswordViewModel {
        link_state,
        password,
        confirmation,
        error,
        save_action,
    }
}
