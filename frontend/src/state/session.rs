use crate::api::{ApiClient, LoginResponse, Role};
use crate::utils::storage;
use leptos::*;
use serde::{Deserialize, Serialize};

/// Fixed persistence keys; the backend contract of the deployed app.
pub const SESSION_USER_KEY: &str = "user";
pub const SESSION_TOKEN_KEY: &str = "token";

pub type SessionContext = (
    ReadSignal<Option<Session>>,
    WriteSignal<Option<Session>>,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            id: response.id,
            name: response.name,
            email: response.email,
            role: response.role,
            token: response.token,
        }
    }
}

/// Reads the persisted identity back. Malformed JSON degrades to
/// logged-out rather than failing.
pub fn restore_session() -> Option<Session> {
    let raw = storage::get_item(SESSION_USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn has_persisted_token() -> bool {
    storage::get_item(SESSION_TOKEN_KEY).is_some()
}

fn persist(session: &Session) {
    if let Ok(json) = serde_json::to_string(session) {
        storage::set_item(SESSION_USER_KEY, &json);
    }
    storage::set_item(SESSION_TOKEN_KEY, &session.token);
}

pub fn clear_persisted() {
    storage::remove_item(SESSION_USER_KEY);
    storage::remove_item(SESSION_TOKEN_KEY);
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(restore_session());
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(None))
}

/// Persists then publishes, so a reload started mid-login still recovers
/// a consistent snapshot.
pub fn login(set_session: WriteSignal<Option<Session>>, response: LoginResponse) {
    let session = Session::from(response);
    persist(&session);
    set_session.set(Some(session));
}

/// Best-effort server-side invalidation; local cleanup is unconditional
/// and never blocked by a failing backend call.
pub async fn logout(api: &ApiClient, set_session: WriteSignal<Option<Session>>) {
    if let Err(err) = api.logout().await {
        log::error!("échec de la déconnexion côté serveur: {}", err);
    }
    clear_persisted();
    set_session.set(None);
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use leptos::create_runtime;

    fn sample_response() -> LoginResponse {
        LoginResponse {
            id: "u-1".into(),
            name: "Aissatou Bah".into(),
            email: "aissatou@simplon.co".into(),
            role: Role::Student,
            token: "jwt-token".into(),
        }
    }

    #[test]
    fn login_persists_and_restores_across_reload() {
        let runtime = create_runtime();
        let (session, set_session) = create_signal(None::<Session>);

        login(set_session, sample_response());
        assert!(session.get().is_some());
        assert!(has_persisted_token());

        // A fresh signal pair simulates the reload path.
        let restored = restore_session().expect("session should survive reload");
        assert_eq!(restored.id, "u-1");
        assert_eq!(restored.role, Role::Student);

        clear_persisted();
        runtime.dispose();
    }

    #[test]
    fn malformed_persisted_identity_degrades_to_logged_out() {
        storage::set_item(SESSION_USER_KEY, "{pas du json");
        assert!(restore_session().is_none());
        storage::remove_item(SESSION_USER_KEY);
    }

    #[tokio::test]
    async fn logout_clears_local_state_even_when_server_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(500)
                .json_body(serde_json::json!({ "message": "indisponible" }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(None::<Session>);
        login(set_session, sample_response());
        assert!(session.get().is_some());

        let api = ApiClient::new_with_base_url(server.url("/api"));
        logout(&api, set_session).await;

        assert!(session.get().is_none());
        assert!(restore_session().is_none());
        assert!(!has_persisted_token());
        runtime.dispose();
    }
}
