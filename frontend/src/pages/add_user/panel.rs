use super::view_model::use_add_user_view_model;
use crate::api::Role;
use crate::components::common::{ButtonSpinner, ErrorBanner, SuccessBanner};
use leptos::*;

#[component]
pub fn AddUserPanel() -> impl IntoView {
    let vm = use_add_user_view_model();
    let name = vm.name;
    let email = vm.email;
    let phone = vm.phone;
    let role = vm.role;
    let error = vm.error;
    let success = vm.success;
    let submit_action = vm.submit_action;

    let pending = submit_action.pending();

    view! {
        <div class="mx-auto max-w-270 p-6">
            <div class="rounded-sm border border-stroke bg-white shadow-default dark:border-strokedark dark:bg-boxdark">
                <div class="border-b border-stroke py-4 px-7 dark:border-strokedark">
                    <h3 class="font-medium text-black dark:text-white">
                        "Ajouter un utilisateur"
                    </h3>
                </div>
                <div class="p-7">
                    <ErrorBanner message=Signal::derive(move || error.get()) />
                    <SuccessBanner message=Signal::derive(move || success.get()) />

                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit_action.dispatch(());
                    }>
                        <div class="mb-5 flex flex-col gap-5 sm:flex-row">
                            <div class="w-full sm:w-1/2">
                                <label
                                    for="fullName"
                                    class="mb-3 block text-sm font-medium text-black dark:text-white"
                                >
                                    "Nom complet"
                                </label>
                                <input
                                    id="fullName"
                                    name="fullName"
                                    type="text"
                                    class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                    placeholder="Ibrahim Bah"
                                    prop:value=name
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="w-full sm:w-1/2">
                                <label
                                    for="phoneNumber"
                                    class="mb-3 block text-sm font-medium text-black dark:text-white"
                                >
                                    "Numéro de téléphone"
                                </label>
                                <input
                                    id="phoneNumber"
                                    name="phoneNumber"
                                    type="text"
                                    class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                    placeholder="000 00 00 00"
                                    prop:value=phone
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="mb-5">
                            <label
                                for="email"
                                class="mb-3 block text-sm font-medium text-black dark:text-white"
                            >
                                "Email"
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                placeholder="devidjond45@gmail.com"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="mb-5">
                            <label class="mb-3 block text-sm font-medium text-black dark:text-white">
                                "Rôle de l'utilisateur"
                            </label>
                            <div class="flex flex-col gap-5 sm:flex-row">
                                <div class="flex w-full items-center rounded border border-stroke ps-4 sm:w-1/2">
                                    <input
                                        id="Admin"
                                        type="radio"
                                        name="role"
                                        prop:checked=move || role.get() == Some(Role::Admin)
                                        on:change=move |_| role.set(Some(Role::Admin))
                                        class="h-4 w-4"
                                    />
                                    <label
                                        for="Admin"
                                        class="ms-2 w-full py-4 text-sm font-medium text-black dark:text-white"
                                    >
                                        "Admin"
                                    </label>
                                </div>
                                <div class="flex w-full items-center rounded border border-stroke ps-4 sm:w-1/2">
                                    <input
                                        id="Student"
                                        type="radio"
                                        name="role"
                                        prop:checked=move || role.get() == Some(Role::Student)
                                        on:change=move |_| role.set(Some(Role::Student))
                                        class="h-4 w-4"
                                    />
                                    <label
                                        for="Student"
                                        class="ms-2 w-full py-4 text-sm font-medium text-black dark:text-white"
                                    >
                                        "Étudiant"
                                    </label>
                                </div>
                            </div>
                        </div>

                        <div class="flex justify-center gap-4">
                            <a
                                href="/accueil"
                                class="flex justify-center rounded border border-stroke py-2 px-6 font-medium text-black dark:border-strokedark dark:text-white"
                            >
                                "Annuler"
                            </a>
                            <button
                                type="submit"
                                disabled=move || pending.get()
                                class=move || {
                                    if pending.get() {
                                        "flex justify-center rounded bg-gray-500 py-2 px-6 font-medium text-white"
                                    } else {
                                        "flex justify-center rounded bg-blue-600 py-2 px-6 font-medium text-white hover:bg-opacity-90"
                                    }
                                }
                            >
                                "Enregistrer"
                                <Show when=move || pending.get() fallback=|| ()>
                                    <ButtonSpinner />
                                </Show>
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
