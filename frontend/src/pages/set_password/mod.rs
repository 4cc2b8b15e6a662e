use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::SetPasswordPanel;

#[component]
pub fn SetPasswordPage() -> impl IntoView {
    view! { <SetPasswordPanel /> }
}
