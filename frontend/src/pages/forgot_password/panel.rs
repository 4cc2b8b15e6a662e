use super::view_model::use_forgot_password_view_model;
use crate::components::common::ErrorBanner;
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let email = vm.email;
    let error = vm.error;
    let success = vm.success;
    let submit_action = vm.submit_action;

    let pending = submit_action.pending();

    view! {
        <div class="flex min-h-screen items-center justify-center bg-surface px-4 py-12">
            <div class="w-full max-w-md space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-black dark:text-white">
                        "Réinitialiser votre mot de passe"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-500 dark:text-gray-300">
                        "Entrez votre adresse email et nous vous enverrons un lien de réinitialisation."
                    </p>
                </div>

                {move || {
                    if let Some(msg) = success.get() {
                        view! {
                            <div class="rounded-md bg-green-100 p-4 text-green-800">
                                <h3 class="text-sm font-medium">{msg}</h3>
                                <p class="mt-2 text-sm">"Consultez votre boîte mail pour le lien de réinitialisation."</p>
                                <div class="mt-4">
                                    <a href="/login" class="text-sm font-medium hover:underline">
                                        "Retour à la connexion"
                                    </a>
                                </div>
                            </div>
                        }
                            .into_view()
                    } else {
                        view! {
                            <form
                                class="mt-8 space-y-6"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    submit_action.dispatch(email.get());
                                }
                            >
                                <div>
                                    <label for="email-address" class="sr-only">
                                        "Adresse email"
                                    </label>
                                    <input
                                        id="email-address"
                                        name="email"
                                        type="email"
                                        autocomplete="email"
                                        class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                        placeholder="Adresse email"
                                        prop:value=email
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </div>

                                <ErrorBanner message=Signal::derive(move || error.get()) />

                                <button
                                    type="submit"
                                    disabled=move || pending.get()
                                    class="flex w-full justify-center rounded bg-blue-600 py-2 px-4 font-medium text-white hover:bg-blue-700 disabled:opacity-50"
                                >
                                    {move || {
                                        if pending.get() { "Envoi..." } else { "Envoyer le lien" }
                                    }}
                                </button>

                                <div class="text-center text-sm">
                                    <a href="/login" class="font-medium text-blue-600 hover:underline">
                                        "Retour à la connexion"
                                    </a>
                                </div>
                            </form>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_renders_email_field_and_login_link() {
        let html = render_to_string(|| view! { <ForgotPasswordPanel /> });
        assert!(html.contains("Réinitialiser votre mot de passe"));
        assert!(html.contains("Envoyer le lien"));
        assert!(html.contains("Retour à la connexion"));
    }
}
