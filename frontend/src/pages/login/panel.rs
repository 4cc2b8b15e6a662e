use super::view_model::use_login_view_model;
use crate::components::common::ErrorBanner;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let email = vm.email;
    let password = vm.password;
    let error = vm.error;
    let submit_action = vm.submit_action;

    let pending = submit_action.pending();

    view! {
        <div class="flex min-h-screen items-center justify-center bg-surface px-4 py-12">
            <div class="w-full max-w-md space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-black dark:text-white">
                    "POINTAGE PRÉSENCE SIMPLON PITA P02"
                </h2>
                <form
                    class="mt-8 space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit_action.dispatch((email.get(), password.get()));
                    }
                >
                    <div>
                        <label for="email" class="mb-2 block text-black dark:text-white">
                            "Email"
                        </label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                            placeholder="Entrez votre email"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="mb-2 block text-black dark:text-white">
                            "Mot de passe"
                        </label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                            placeholder="Entrez votre mot de passe"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <ErrorBanner message=Signal::derive(move || error.get()) />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="flex w-full justify-center rounded bg-blue-600 py-2 px-4 font-medium text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                    </button>

                    <div class="text-center text-sm">
                        <a href="/forgot-password" class="font-medium text-blue-600 hover:underline">
                            "Mot de passe oublié ?"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_fields_and_reset_link() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Se connecter"));
        assert!(html.contains("Mot de passe oublié ?"));
        assert!(html.contains("Entrez votre email"));
    }
}
