use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{
        guard::{decide_one_time_token, GateDecision, RedirectAuthenticated, RequireSession},
        layout::{chrome_visible, AppHeader},
    },
    pages::{
        add_user::AddUserPage, forgot_password::ForgotPasswordPage, home::HomePage,
        history::HistoryPage, login::LoginPage, reset_password::ResetPasswordPage,
        set_password::SetPasswordPage,
    },
    state::session::{self, SessionProvider},
    utils::url,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/login",
    "/set-password",
    "/forgot-password",
    "/reset-password/:token",
    "/accueil",
    "/historique",
    "/add-user",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/accueil", "/historique", "/add-user"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/login",
    "/set-password",
    "/forgot-password",
    "/reset-password/:token",
];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="Pointage Présence Simplon Pita P02"/>
        <SessionProvider>
            <Router>
                <AppShell/>
            </Router>
        </SessionProvider>
    }
}

/// The header only shows on authenticated surfaces; password-link pages
/// stay chrome-less even when a stale session lingers in storage.
#[component]
fn AppShell() -> impl IntoView {
    let (session_signal, _) = session::use_session();
    let location = use_location();

    let show_chrome = create_memo(move |_| {
        let search = location.search.get();
        let path = location.pathname.get();
        chrome_visible(
            session_signal.get().is_some(),
            session::has_persisted_token(),
            url::query_param(&search, "t").is_some(),
            url::is_reset_password_path(&path),
        )
    });

    view! {
        <Show when=move || show_chrome.get() fallback=|| ()>
            <AppHeader/>
        </Show>
        <Routes>
            <Route path="/login" view=GatedLogin/>
            <Route path="/set-password" view=SetPasswordGate/>
            <Route path="/forgot-password" view=ForgotPasswordPage/>
            <Route path="/reset-password/:token" view=ResetPasswordGate/>
            <Route path="/accueil" view=ProtectedHome/>
            <Route path="/historique" view=ProtectedHistory/>
            <Route path="/add-user" view=ProtectedAddUser/>
            <Route path="/*any" view=GatedLogin/>
        </Routes>
    }
}

#[component]
fn GatedLogin() -> impl IntoView {
    view! { <RedirectAuthenticated><LoginPage/></RedirectAuthenticated> }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireSession><HomePage/></RequireSession> }
}

#[component]
fn ProtectedHistory() -> impl IntoView {
    view! { <RequireSession><HistoryPage/></RequireSession> }
}

#[component]
fn ProtectedAddUser() -> impl IntoView {
    view! { <RequireSession><AddUserPage/></RequireSession> }
}

/// `/set-password` only makes sense with the one-time `?t=` token from the
/// invitation email; without it the visitor goes back to the login form.
#[component]
fn SetPasswordGate() -> impl IntoView {
    let query = use_query_map();
    let decision = create_memo(move |_| {
        let token = query.with(|q| q.get("t").cloned());
        decide_one_time_token(token.as_deref())
    });
    create_effect(move |_| {
        if decision.get() == GateDecision::RedirectToLogin {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    view! {
        <Show when=move || decision.get() == GateDecision::Render fallback=|| ()>
            <SetPasswordPage/>
        </Show>
    }
}

#[component]
fn ResetPasswordGate() -> impl IntoView {
    let params = use_params_map();
    let decision = create_memo(move |_| {
        let token = params.with(|p| p.get("token").cloned());
        decide_one_time_token(token.as_deref())
    });
    create_effect(move |_| {
        if decision.get() == GateDecision::RedirectToLogin {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    view! {
        <Show when=move || decision.get() == GateDecision::Render fallback=|| ()>
            <ResetPasswordPage/>
        </Show>
    }
}
