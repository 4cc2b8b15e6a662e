use super::repository::ResetPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::utils::{timer, validation};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub password: RwSignal<String>,
    pub confirmation: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<(String, String, String), Result<MessageResponse, ApiError>>,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));

    let password = create_rw_signal(String::new());
    let confirmation = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(
        move |(token, password, confirmation): &(String, String, String)| {
            let repo = repo_for_submit.clone();
            let token = token.clone();
            let password = password.clone();
            let confirmation = confirmation.clone();
            async move {
                if let Some(message) = validation::new_password_error(&password, &confirmation) {
                    return Err(ApiError::validation(message));
                }
                repo.reset(&token, password).await
            }
        },
    );

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    error.set(None);
                    success.set(Some(format!("{} Redirection...", resp.message)));
                    timer::redirect_after("/login", timer::REDIRECT_DELAY_MILLIS);
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    ResetPasswordViewModel {
        password,
        confirmation,
        error,
        success,
        submit_action,
    }
}

