use crate::api::ApiClient;
use crate::state::session::{self, use_session};
use leptos::*;
use std::rc::Rc;

/// The header and nav stay hidden on the anonymous and one-time-token
/// surfaces (password links open in a chrome-less page).
pub fn chrome_visible(
    has_session: bool,
    has_token: bool,
    url_has_one_time_token: bool,
    on_reset_password_path: bool,
) -> bool {
    has_session && has_token && !url_has_one_time_token && !on_reset_password_path
}

#[component]
pub fn AppHeader() -> impl IntoView {
    let (session_signal, set_session) = use_session();
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));

    let logout_action = create_action(move |_: &()| {
        let api = api.clone();
        async move {
            session::logout(&api, set_session).await;
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let logging_out = logout_action.pending();

    let is_admin = create_memo(move |_| {
        session_signal
            .get()
            .map(|s| s.role.is_admin())
            .unwrap_or(false)
    });
    let display_name = move || session_signal.get().map(|s| s.name).unwrap_or_default();

    view! {
        <header class="sticky top-0 z-40 flex w-full items-center justify-between bg-white px-6 py-4 shadow dark:bg-boxdark">
            <a href="/accueil" class="text-lg font-semibold text-black dark:text-white">
                "POINTAGE PRÉSENCE SIMPLON PITA P02"
            </a>
            <nav class="flex items-center gap-6">
                <a href="/accueil" class="text-sm font-medium text-black hover:text-primary dark:text-white">
                    "Accueil"
                </a>
                <a href="/historique" class="text-sm font-medium text-black hover:text-primary dark:text-white">
                    "Historique"
                </a>
                <Show when=move || is_admin.get() fallback=|| ()>
                    <a href="/add-user" class="text-sm font-medium text-black hover:text-primary dark:text-white">
                        "Ajouter un utilisateur"
                    </a>
                </Show>
                <span class="text-sm text-gray-500 dark:text-gray-300">{display_name}</span>
                <button
                    type="button"
                    disabled=move || logging_out.get()
                    on:click=move |_| logout_action.dispatch(())
                    class="rounded bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700 disabled:opacity-50"
                >
                    {move || if logging_out.get() { "Déconnexion..." } else { "Déconnexion" }}
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::chrome_visible;

    #[test]
    fn chrome_needs_full_session() {
        assert!(chrome_visible(true, true, false, false));
        assert!(!chrome_visible(false, true, false, false));
        assert!(!chrome_visible(true, false, false, false));
    }

    #[test]
    fn chrome_stays_hidden_on_token_surfaces() {
        assert!(!chrome_visible(true, true, true, false));
        assert!(!chrome_visible(true, true, false, true));
    }
}
