use super::repository::StudentsRepository;
use crate::api::{
    ApiClient, ApiError, AttendanceRecord, AttendanceStatus, MessageResponse, Role, UserSummary,
};
use crate::components::history_dialog::{to_entries, HistoryDialogState};
use crate::state::session::{use_session, Session};
use leptos::*;
use std::rc::Rc;

pub const CONFIRM_DELETE_MESSAGE: &str = "Êtes-vous sûr de vouloir supprimer cet étudiant ?";
pub const ABSENT_REASON_PROMPT: &str = "Entrez la raison de la sanction :";

#[cfg(target_arch = "wasm32")]
fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

// `web_sys::window()` panics off-wasm; headless runtimes have no window.
#[cfg(not(target_arch = "wasm32"))]
fn window() -> Option<web_sys::Window> {
    None
}

/// Browser dialogs, no-ops on a headless runtime.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Cancelled or empty input both abort, so they collapse to `None`.
pub fn prompt(message: &str) -> Option<String> {
    window()?
        .prompt_with_message(message)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Marking posts the caller's own role; without a session there is nothing
/// truthful to send.
fn caller_role(session: Option<Session>) -> Result<Role, ApiError> {
    session
        .map(|s| s.role)
        .ok_or_else(|| ApiError::validation("Session expirée"))
}

#[derive(Clone)]
pub struct StudentsViewModel {
    pub users: RwSignal<Vec<UserSummary>>,
    pub loading: RwSignal<bool>,
    pub history: HistoryDialogState,
    pub selected_name: RwSignal<String>,
    pub load_users: Action<(), Result<Vec<UserSummary>, ApiError>>,
    pub load_history: Action<(String, String), Result<Vec<AttendanceRecord>, ApiError>>,
    pub mark_action: Action<(String, AttendanceStatus, Option<String>), Result<MessageResponse, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

pub fn use_students_view_model() -> StudentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentsRepository::new_with_client(Rc::new(api));
    let (session_signal, _) = use_session();

    let users = create_rw_signal(Vec::new());
    let loading = create_rw_signal(true);
    let history = HistoryDialogState::new();
    let selected_name = create_rw_signal(String::new());

    let repo_for_list = repository.clone();
    let load_users = create_action(move |_: &()| {
        let repo = repo_for_list.clone();
        async move { repo.list().await }
    });

    create_effect(move |already_dispatched: Option<bool>| {
        if already_dispatched.unwrap_or(false) {
            return true;
        }
        load_users.dispatch(());
        true
    });

    create_effect(move |_| {
        if let Some(result) = load_users.value().get() {
            loading.set(false);
            match result {
                Ok(list) => users.set(list),
                Err(err) => log::warn!("chargement des étudiants impossible: {}", err),
            }
        }
    });

    let repo_for_history = repository.clone();
    let load_history = create_action(move |(id, name): &(String, String)| {
        let repo = repo_for_history.clone();
        let id = id.clone();
        selected_name.set(name.clone());
        history.open_with(Vec::new());
        async move { repo.history(&id).await }
    });

    create_effect(move |_| {
        if let Some(result) = load_history.value().get() {
            match result {
                Ok(records) => history.entries.set(to_entries(records)),
                Err(err) => log::warn!("chargement de l'historique impossible: {}", err),
            }
        }
    });

    let repo_for_mark = repository.clone();
    let mark_action = create_action(
        move |(id, status, reason): &(String, AttendanceStatus, Option<String>)| {
            let repo = repo_for_mark.clone();
            let id = id.clone();
            let status = *status;
            let reason = reason.clone();
            let session = session_signal.get_untracked();
            async move {
                let role = caller_role(session)?;
                repo.mark(id, role, status, reason).await
            }
        },
    );

    create_effect(move |_| {
        if let Some(result) = mark_action.value().get() {
            match result {
                Ok(resp) => alert(&resp.message),
                Err(err) => alert(&err.to_string()),
            }
        }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |user_id: &String| {
        let repo = repo_for_delete.clone();
        let user_id = user_id.clone();
        async move { repo.delete(&user_id).await }
    });

    // A successful delete refreshes the list.
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(resp) => {
                    alert(&resp.message);
                    load_users.dispatch(());
                }
                Err(err) => alert(&err.to_string()),
            }
        }
    });

    StudentsViewModel {
        users,
        loading,
        history,
        selected_name,
        load_users,
        load_history,
        mark_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn browser_dialogs_degrade_without_a_window() {
        assert!(!confirm(CONFIRM_DELETE_MESSAGE));
        assert!(prompt(ABSENT_REASON_PROMPT).is_none());
        alert("sans fenêtre");
    }

    #[test]
    fn marking_requires_a_session() {
        use crate::test_support::helpers::admin_session;

        let err = caller_role(None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Session expirée");
        assert_eq!(caller_role(Some(admin_session())).unwrap(), Role::Admin);
    }
}
