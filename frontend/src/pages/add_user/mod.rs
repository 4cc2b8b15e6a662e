use leptos::*;

mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::AddUserPanel;

#[component]
pub fn AddUserPage() -> impl IntoView {
    view! { <AddUserPanel /> }
}
