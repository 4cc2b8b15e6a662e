use super::repository::AddUserRepository;
use super::utils::new_user_error;
use crate::api::{AddUserRequest, ApiClient, ApiError, MessageResponse, Role};
use crate::utils::timer;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct AddUserViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub role: RwSignal<Option<Role>>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<(), Result<MessageResponse, ApiError>>,
}

pub fn use_add_user_view_model() -> AddUserViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AddUserRepository::new_with_client(Rc::new(api));

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let role = create_rw_signal(None::<Role>);
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |_: &()| {
        let repo = repo_for_submit.clone();
        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let phone_value = phone.get_untracked().trim().to_string();
        let role_value = role.get_untracked();
        async move {
            if let Some(message) =
                new_user_error(&name_value, &email_value, &phone_value, role_value)
            {
                return Err(ApiError::validation(message));
            }
            // Guarded by the check above.
            let role_value = role_value.ok_or_else(|| {
                ApiError::validation("Veuillez sélectionner un rôle.")
            })?;
            repo.add(AddUserRequest {
                name: name_value,
                email: email_value,
                phone_number: phone_value,
                role: role_value,
            })
            .await
        }
    });

    // The form clears after the server answers, banners fade after 5 s.
    // Field-level validation keeps the typed values so they can be fixed.
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            let keep_values = matches!(&result, Err(err) if err.is_validation());
            match result {
                Ok(resp) => {
                    success.set(Some(resp.message));
                    timer::clear_after(success, timer::MESSAGE_DISPLAY_MILLIS);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    timer::clear_after(error, timer::MESSAGE_DISPLAY_MILLIS);
                }
            }
            if !keep_values {
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                role.set(None);
            }
        }
    });

    AddUserViewModel {
        name,
        email,
        phone,
        role,
        error,
        success,
        submit_action,
    }
}
