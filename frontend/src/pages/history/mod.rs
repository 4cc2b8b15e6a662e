use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::StudentsListPanel;

use crate::state::session::use_session;

/// Admins manage the student list here; students only get a placeholder,
/// their history opens from the home page.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let (session_signal, _) = use_session();
    view! {
        {move || match session_signal.get() {
            Some(session) if session.role.is_admin() => {
                view! { <StudentsListPanel /> }.into_view()
            }
            Some(_) => view! { <div>"Student History"</div> }.into_view(),
            None => ().into_view(),
        }}
    }
}
