use super::repository::StudentRepository;
use super::utils::{validate, AttendanceChoice};
use crate::api::{ApiClient, ApiError, AttendanceRecord, MessageResponse, SubmitAttendanceRequest};
use crate::components::history_dialog::{to_entries, HistoryDialogState};
use crate::state::session::use_session;
use crate::utils::{geolocation, time, timer};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct StudentViewModel {
    pub weekend: bool,
    pub choice: RwSignal<AttendanceChoice>,
    pub reason: RwSignal<String>,
    pub blocking_error: RwSignal<Option<String>>,
    pub server_error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<(), Result<MessageResponse, ApiError>>,
    pub history: HistoryDialogState,
    pub load_history: Action<(), Result<Vec<AttendanceRecord>, ApiError>>,
}

pub fn use_student_view_model() -> StudentViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentRepository::new_with_client(Rc::new(api));
    let (session_signal, _) = use_session();

    let weekend = time::is_weekend(time::today_local());
    let choice = create_rw_signal(AttendanceChoice::default());
    let reason = create_rw_signal(String::new());
    let blocking_error = create_rw_signal(None::<String>);
    let server_error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);
    let position = create_rw_signal(None::<geolocation::GeoFix>);
    let history = HistoryDialogState::new();

    geolocation::acquire(
        move |fix| {
            let _ = position.try_set(Some(fix));
        },
        move |message| {
            let _ = blocking_error.try_set(Some(message.to_string()));
        },
    );

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |_: &()| {
        let repo = repo_for_submit.clone();
        let session = session_signal.get_untracked();
        let current_choice = choice.get_untracked();
        let current_reason = reason.get_untracked();
        let fix = position.get_untracked();
        async move {
            let session = session.ok_or_else(|| ApiError::validation("Session expirée"))?;
            let (status, reason) =
                validate(current_choice, &current_reason).map_err(ApiError::validation)?;
            repo.submit(SubmitAttendanceRequest {
                student_id: session.id,
                role: session.role,
                status,
                reason,
                latitude: fix.map(|f| f.latitude),
                longitude: fix.map(|f| f.longitude),
            })
            .await
        }
    });

    // The form clears on both settlement paths.
    // TODO: keep the typed reason when the submit fails instead of making
    // the student retype it.
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    success.set(Some(resp.message));
                    timer::clear_after(success, timer::MESSAGE_DISPLAY_MILLIS);
                }
                Err(err) => {
                    server_error.set(Some(err.to_string()));
                    timer::clear_after(server_error, timer::MESSAGE_DISPLAY_MILLIS);
                }
            }
            choice.set(AttendanceChoice::default());
            reason.set(String::new());
        }
    });

    let repo_for_history = repository.clone();
    let load_history = create_action(move |_: &()| {
        let repo = repo_for_history.clone();
        let session = session_signal.get_untracked();
        async move {
            let session = session.ok_or_else(|| ApiError::validation("Session expirée"))?;
            repo.history(&session.id).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = load_history.value().get() {
            match result {
                Ok(records) => history.entries.set(to_entries(records)),
                Err(err) => log::warn!("chargement de l'historique impossible: {}", err),
            }
        }
    });

    StudentViewModel {
        weekend,
        choice,
        reason,
        blocking_error,
        server_error,
        success,
        submit_action,
        history,
        load_history,
    }
}
