use crate::state::session::{self, use_session};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/accueil";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    RedirectToLanding,
}

/// Protected routes need both a live session and the persisted token.
pub fn decide_protected(has_session: bool, has_token: bool) -> GateDecision {
    if has_session && has_token {
        GateDecision::Render
    } else {
        GateDecision::RedirectToLogin
    }
}

/// The login route bounces an already-authenticated visitor to the landing
/// page instead of showing the form again.
pub fn decide_login(has_session: bool, has_token: bool) -> GateDecision {
    if has_session && has_token {
        GateDecision::RedirectToLanding
    } else {
        GateDecision::Render
    }
}

/// One-time-token routes (query `?t=` or path segment) render only when the
/// token is actually present.
pub fn decide_one_time_token(token: Option<&str>) -> GateDecision {
    match token {
        Some(token) if !token.is_empty() => GateDecision::Render,
        _ => GateDecision::RedirectToLogin,
    }
}

fn redirect(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session_signal, _) = use_session();
    let decision = create_memo(move |_| {
        decide_protected(
            session_signal.get().is_some(),
            session::has_persisted_token(),
        )
    });
    create_effect(move |_| {
        if decision.get() == GateDecision::RedirectToLogin {
            redirect(LOGIN_PATH);
        }
    });
    view! {
        <Show when=move || decision.get() == GateDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Wraps the login page so an authenticated visitor lands on `/accueil`.
#[component]
pub fn RedirectAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (session_signal, _) = use_session();
    let decision = create_memo(move |_| {
        decide_login(
            session_signal.get().is_some(),
            session::has_persisted_token(),
        )
    });
    create_effect(move |_| {
        if decision.get() == GateDecision::RedirectToLanding {
            redirect(LANDING_PATH);
        }
    });
    view! {
        <Show when=move || decision.get() == GateDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_need_session_and_token() {
        assert_eq!(decide_protected(true, true), GateDecision::Render);
        assert_eq!(decide_protected(true, false), GateDecision::RedirectToLogin);
        assert_eq!(decide_protected(false, true), GateDecision::RedirectToLogin);
        assert_eq!(
            decide_protected(false, false),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn login_route_bounces_authenticated_visitors() {
        assert_eq!(decide_login(true, true), GateDecision::RedirectToLanding);
        assert_eq!(decide_login(true, false), GateDecision::Render);
        assert_eq!(decide_login(false, false), GateDecision::Render);
    }

    #[test]
    fn one_time_token_routes_need_a_token() {
        assert_eq!(decide_one_time_token(Some("tok-1")), GateDecision::Render);
        assert_eq!(
            decide_one_time_token(Some("")),
            GateDecision::RedirectToLogin
        );
        assert_eq!(decide_one_time_token(None), GateDecision::RedirectToLogin);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SESSION_TOKEN_KEY;
    use crate::test_support::helpers::{provide_session, student_session};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::storage;

    #[test]
    fn require_session_renders_children_when_authenticated() {
        storage::set_item(SESSION_TOKEN_KEY, "jeton-etudiant");
        let html = render_to_string(move || {
            provide_session(Some(student_session()));
            view! {
                <RequireSession>
                    <div>"contenu-protege"</div>
                </RequireSession>
            }
        });
        storage::remove_item(SESSION_TOKEN_KEY);
        assert!(html.contains("contenu-protege"));
    }

    #[test]
    fn require_session_hides_children_without_session() {
        storage::remove_item(SESSION_TOKEN_KEY);
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RequireSession>
                    <div>"contenu-protege"</div>
                </RequireSession>
            }
        });
        assert!(!html.contains("contenu-protege"));
    }

    #[test]
    fn require_session_hides_children_without_persisted_token() {
        storage::remove_item(SESSION_TOKEN_KEY);
        let html = render_to_string(move || {
            provide_session(Some(student_session()));
            view! {
                <RequireSession>
                    <div>"contenu-protege"</div>
                </RequireSession>
            }
        });
        assert!(!html.contains("contenu-protege"));
    }

    #[test]
    fn login_gate_hides_form_for_authenticated_visitors() {
        storage::set_item(SESSION_TOKEN_KEY, "jeton-etudiant");
        let html = render_to_string(move || {
            provide_session(Some(student_session()));
            view! {
                <RedirectAuthenticated>
                    <div>"formulaire-connexion"</div>
                </RedirectAuthenticated>
            }
        });
        storage::remove_item(SESSION_TOKEN_KEY);
        assert!(!html.contains("formulaire-connexion"));
    }
}
