use super::repository::LoginRepository;
use super::utils::validate_credentials;
use crate::api::{ApiClient, ApiError, LoginResponse};
use crate::state::session::{self, use_session};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submit_action: Action<(String, String), Result<LoginResponse, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let (_, set_session) = use_session();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |(email, password): &(String, String)| {
        let repo = repo_for_submit.clone();
        let email = email.trim().to_string();
        let password = password.clone();
        async move {
            if let Some(message) = validate_credentials(&email, &password) {
                return Err(ApiError::validation(message));
            }
            repo.login(email, password).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => {
                    error.set(None);
                    session::login(set_session, response);
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().set_href("/accueil");
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        submit_action,
    }
}
