use leptos::*;

mod admin;
pub mod student;

pub use admin::AdminRosterPanel;
pub use student::StudentPanel;

use crate::state::session::use_session;

/// `/accueil` switches on the authenticated role: admins get the daily
/// roster, students get the check-in form.
#[component]
pub fn HomePage() -> impl IntoView {
    let (session_signal, _) = use_session();
    view! {
        {move || match session_signal.get() {
            Some(session) if session.role.is_admin() => {
                view! { <AdminRosterPanel /> }.into_view()
            }
            Some(_) => view! { <StudentPanel /> }.into_view(),
            None => ().into_view(),
        }}
    }
}
