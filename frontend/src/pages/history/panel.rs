use super::view_model::{
    confirm, prompt, use_students_view_model, ABSENT_REASON_PROMPT, CONFIRM_DELETE_MESSAGE,
};
use crate::api::AttendanceStatus;
use crate::components::common::LoadingSpinner;
use crate::components::history_dialog::HistoryDialog;
use leptos::*;

#[component]
pub fn StudentsListPanel() -> impl IntoView {
    let vm = use_students_view_model();
    let users = vm.users;
    let loading = vm.loading;
    let history = vm.history;
    let selected_name = vm.selected_name;
    let load_history = vm.load_history;
    let mark_action = vm.mark_action;
    let delete_action = vm.delete_action;

    view! {
        <div class="rounded-sm border border-stroke bg-white px-5 pt-6 pb-2.5 shadow-default dark:border-strokedark dark:bg-boxdark">
            <table class="w-full table-auto">
                    <thead>
                        <tr class="bg-gray-2 text-left dark:bg-meta-4">
                            <th class="min-w-[220px] py-4 px-4 font-medium text-black dark:text-white">
                                "Nom et Prénoms"
                            </th>
                            <th class="min-w-[150px] py-4 px-4 font-medium text-black dark:text-white">
                                "Numéro de téléphone"
                            </th>
                            <th class="min-w-[120px] py-4 px-4 font-medium text-black dark:text-white">
                                "Status"
                            </th>
                            <th class="py-4 px-4 font-medium text-black dark:text-white">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || loading.get() fallback=|| ()>
                            <tr>
                                <td colspan="4" class="py-4 px-4">
                                    <LoadingSpinner />
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || users.get()
                            key=|user| user.id.clone()
                            children=move |user| {
                                let id_for_history = user.id.clone();
                                let name_for_history = user.name.clone();
                                let id_for_present = user.id.clone();
                                let id_for_absent = user.id.clone();
                                let id_for_delete = user.id.clone();
                                let active = user.status == "active";
                                view! {
                                    <tr class="border-b border-stroke dark:border-strokedark">
                                        <td class="py-4 px-4 text-black dark:text-white">
                                            {user.name.clone()}
                                        </td>
                                        <td class="py-4 px-4 text-black dark:text-white">
                                            {user.phone_number.clone()}
                                        </td>
                                        <td class="py-4 px-4">
                                            <span class=if active {
                                                "inline-flex rounded-full bg-green-100 py-1 px-3 text-sm font-medium text-green-800"
                                            } else {
                                                "inline-flex rounded-full bg-red-100 py-1 px-3 text-sm font-medium text-red-800"
                                            }>{if active { "Actif" } else { "Inactif" }}</span>
                                        </td>
                                        <td class="py-4 px-4">
                                            <div class="flex flex-wrap items-center gap-2">
                                                <button
                                                    type="button"
                                                    class="rounded border border-stroke px-3 py-1 text-sm hover:bg-gray-100"
                                                    on:click=move |_| {
                                                        load_history
                                                            .dispatch((
                                                                id_for_history.clone(),
                                                                name_for_history.clone(),
                                                            ));
                                                    }
                                                >
                                                    "Voir son historique de présence/absence"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="rounded border border-stroke px-3 py-1 text-sm hover:bg-gray-100"
                                                    on:click=move |_| {
                                                        mark_action
                                                            .dispatch((
                                                                id_for_present.clone(),
                                                                AttendanceStatus::Present,
                                                                None,
                                                            ));
                                                    }
                                                >
                                                    "Marquer présent pour aujourd'hui"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="rounded border border-stroke px-3 py-1 text-sm hover:bg-gray-100"
                                                    on:click=move |_| {
                                                        if let Some(reason) = prompt(ABSENT_REASON_PROMPT) {
                                                            mark_action
                                                                .dispatch((
                                                                    id_for_absent.clone(),
                                                                    AttendanceStatus::Absent,
                                                                    Some(reason),
                                                                ));
                                                        }
                                                    }
                                                >
                                                    "Marquer absent pour aujourd'hui"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="rounded border border-red-500 px-3 py-1 text-sm text-red-500 hover:bg-red-50"
                                                    on:click=move |_| {
                                                        if confirm(CONFIRM_DELETE_MESSAGE) {
                                                            delete_action.dispatch(id_for_delete.clone());
                                                        }
                                                    }
                                                >
                                                    "Supprimer"
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

            <HistoryDialog
                state=history
                title=Signal::derive(move || {
                    format!("SITUATION DE L'ÉTUDIANT {}", selected_name.get())
                })
                totals_prefix=Signal::derive(move || format!("{} totalise", selected_name.get()))
                status_prefix="l'étudiant a été"
            />
        </div>
    }
}
