use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

/// Small inline spinner appended to a busy submit button.
#[component]
pub fn ButtonSpinner() -> impl IntoView {
    view! {
        <span class="ml-2 inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-white"></span>
    }
}

#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                class="flex items-center p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
                role="alert"
            >
                <span class="font-medium">"Erreur: "</span>
                " "
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                class="p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 dark:bg-gray-800 dark:text-green-400"
                role="alert"
            >
                <span class="font-medium">"Info: "</span>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
