use super::view_model::{use_set_password_view_model, LinkState, INVALID_LINK_MESSAGE, SUCCESS_MESSAGE};
use crate::components::common::ErrorBanner;
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn SetPasswordPanel() -> impl IntoView {
    let query = use_query_map();
    let token = Signal::derive(move || query.with(|q| q.get("t").cloned().unwrap_or_default()));

    let vm = use_set_password_view_model(token);
    let link_state = vm.link_state;
    let password = vm.password;
    let confirmation = vm.confirmation;
    let error = vm.error;
    let save_action = vm.save_action;

    let pending = save_action.pending();

    view! {
        <div class="flex min-h-screen items-center justify-center bg-surface px-4 py-12">
            <div class="w-full max-w-md space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-black dark:text-white">
                    "Définir votre mot de passe"
                </h2>

                {move || match link_state.get() {
                    LinkState::Verifying => {
                        view! {
                            <p class="text-center text-black dark:text-white">"Chargement..."</p>
                        }
                            .into_view()
                    }
                    LinkState::Invalid => {
                        view! {
                            <div class="rounded-md bg-red-100 p-4 text-red-800">
                                <p>{INVALID_LINK_MESSAGE}</p>
                                <div class="mt-4 flex gap-4">
                                    <a href="/login" class="font-medium hover:underline">
                                        "Se connecter"
                                    </a>
                                    <a href="/forgot-password" class="font-medium hover:underline">
                                        "Demander un nouveau lien"
                                    </a>
                                </div>
                            </div>
                        }
                            .into_view()
                    }
                    LinkState::AlreadyDefined => {
                        view! {
                            <div class="rounded-md bg-yellow-100 p-4 text-yellow-800">
                                <p>"Votre mot de passe est déjà défini."</p>
                                <div class="mt-4">
                                    <a href="/forgot-password" class="font-medium hover:underline">
                                        "Réinitialiser mon mot de passe"
                                    </a>
                                </div>
                            </div>
                        }
                            .into_view()
                    }
                    LinkState::Done => {
                        view! {
                            <div class="rounded-md bg-green-100 p-4 text-green-800">
                                <p>{SUCCESS_MESSAGE}</p>
                            </div>
                        }
                            .into_view()
                    }
                    LinkState::Valid => {
                        view! {
                            <form
                                class="mt-8 space-y-6"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    save_action
                                        .dispatch((token.get(), password.get(), confirmation.get()));
                                }
                            >
                                <div>
                                    <label
                                        for="new-password"
                                        class="mb-2 block text-black dark:text-white"
                                    >
                                        "Mot de passe"
                                    </label>
                                    <input
                                        id="new-password"
                                        name="password"
                                        type="password"
                                        autocomplete="new-password"
                                        class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                        placeholder="Entrez votre mot de passe"
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
                                        placeholder="Confirmez votre mot de passe"
                                        prop:value=confirmation
                                        on:input=move |ev| {
                                            confirmation.set(event_target_value(&ev))
                                        }
                                    />
                                </div>

                                <ErrorBanner message=Signal::derive(move || error.get()) />

                                <button
                                    type="submit"
                                    disabled=move || pending.get()
                                    class="flex w-full justify-center rounded bg-blue-600 py-2 px-4 font-medium text-white hover:bg-blue-700 disabled:opacity-50"
                                >
                                    {move || {
                                        if pending.get() { "Enregistrement..." } else { "Définir" }
                                    }}
                                </button>
                            </form>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}
