use super::view_model::use_reset_password_view_model;
use crate::components::common::{ErrorBanner, SuccessBanner};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let password = vm.password;
    let confirmation = vm.confirmation;
    let error = vm.error;
    let success = vm.success;
    let submit_action = vm.submit_action;

    let params = use_params_map();
    let token = move || params.with(|p| p.get("token").cloned().unwrap_or_default());

    let pending = submit_action.pending();

    view! {
        <div class="flex min-h-screen items-center justify-center bg-surface px-4 py-12">
            <div class="w-full max-w-md space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-black dark:text-white">
                    "Nouveau mot de passe"
                </h2>

                <SuccessBanner message=Signal::derive(move || success.get()) />

                <Show when=move || success.get().is_none() fallback=|| ()>
                    <form
                        class="mt-8 space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit_action.dispatch((token(), password.get(), confirmation.get()));
                        }
                    >
                        <div>
                            <label for="new-password" class="mb-2 block text-black dark:text-white">
                                "Mot de passe"
                            </label>
                            <input
                                id="new-password"
                                name="password"
                                type="password"
                                autocomplete="new-password"
                                class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                placeholder="Entrez votre nouveau mot de passe"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label
                                for="confirm-password"
                                class="mb-2 block text-black dark:text-white"
                            >
                                "Confirmation"
                            </label>
                            <input
                                id="confirm-password"
                                name="confirmation"
                                type="password"
                                autocomplete="new-password"
                                class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                placeholder="Confirmez votre nouveau mot de passe"
                                prop:value=confirmation
                                on:input=move |ev| confirmation.set(event_target_value(&ev))
                            />
                        </div>

                        <ErrorBanner message=Signal::derive(move || error.get()) />

                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="flex w-full justify-center rounded bg-blue-600 py-2 px-4 font-medium text-white hover:bg-blue-700 disabled:opacity-50"
                        >
                            {move || {
                                if pending.get() { "Enregistrement..." } else { "Réinitialiser" }
                            }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
