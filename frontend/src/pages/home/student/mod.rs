use leptos::*;

mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::StudentCheckInPanel;

#[component]
pub fn StudentPanel() -> impl IntoView {
    view! { <StudentCheckInPanel /> }
}
