use super::utils::{can_submit, toggle_absent, toggle_present, AttendanceChoice, WEEKEND_MESSAGE};
use super::view_model::use_student_view_model;
use crate::components::common::{ButtonSpinner, ErrorBanner, SuccessBanner};
use crate::components::history_dialog::HistoryDialog;
use leptos::*;

#[component]
pub fn StudentCheckInPanel() -> impl IntoView {
    let vm = use_student_view_model();
    let weekend = vm.weekend;
    let choice = vm.choice;
    let reason = vm.reason;
    let blocking_error = vm.blocking_error;
    let server_error = vm.server_error;
    let success = vm.success;
    let submit_action = vm.submit_action;
    let history = vm.history;
    let load_history = vm.load_history;

    let pending = submit_action.pending();
    let submittable = move || can_submit(choice.get(), &reason.get()) && !pending.get();

    view! {
        <div class="mx-auto max-w-270 p-6">
            <div class="mb-3 flex items-end justify-end">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md border border-blue-600 py-4 px-10 text-center font-medium text-blue-600 hover:bg-opacity-90"
                    on:click=move |_| {
                        history.open_with(Vec::new());
                        load_history.dispatch(());
                    }
                >
                    "Voir mon historique"
                </button>
            </div>

            <div class="rounded-sm border border-stroke bg-white shadow-default dark:border-strokedark dark:bg-boxdark">
                <div class="border-b border-stroke py-4 px-7 dark:border-strokedark">
                    <h3 class="font-medium text-black dark:text-white">
                        "Marquez votre présence ou absence"
                    </h3>
                </div>

                {move || {
                    if weekend {
                        view! {
                            <div class="mb-4 rounded border-l-4 border-yellow-500 bg-yellow-100 p-4 text-center">
                                <p class="font-semibold text-yellow-700">{WEEKEND_MESSAGE}</p>
                            </div>
                        }
                            .into_view()
                    } else if blocking_error.get().is_some() {
                        view! {
                            <ErrorBanner message=Signal::derive(move || blocking_error.get()) />
                        }
                            .into_view()
                    } else {
                        view! {
                            <div class="p-7">
                                <ErrorBanner message=Signal::derive(move || server_error.get()) />
                                <SuccessBanner message=Signal::derive(move || success.get()) />

                                <form on:submit=move |ev| {
                                    ev.prevent_default();
                                    submit_action.dispatch(());
                                }>
                                    <div class="mb-10 flex flex-row justify-center gap-4">
                                        <label class="flex cursor-pointer select-none items-center">
                                            <input
                                                type="checkbox"
                                                class="sr-only"
                                                prop:checked=move || {
                                                    choice.get() == AttendanceChoice::Present
                                                }
                                                on:change=move |_| {
                                                    choice.update(|c| *c = toggle_present(*c))
                                                }
                                            />
                                            <span class=move || {
                                                if choice.get() == AttendanceChoice::Present {
                                                    "rounded-full bg-blue-600 py-2 px-6 text-white"
                                                } else {
                                                    "rounded-full bg-gray-300 py-2 px-6 text-black"
                                                }
                                            }>"Présent"</span>
                                        </label>
                                        <label class="flex cursor-pointer select-none items-center">
                                            <input
                                                type="checkbox"
                                                class="sr-only"
                                                prop:checked=move || {
                                                    choice.get() == AttendanceChoice::Absent
                                                }
                                                on:change=move |_| {
                                                    choice.update(|c| *c = toggle_absent(*c))
                                                }
                                            />
                                            <span class=move || {
                                                if choice.get() == AttendanceChoice::Absent {
                                                    "rounded-full bg-blue-600 py-2 px-6 text-white"
                                                } else {
                                                    "rounded-full bg-gray-300 py-2 px-6 text-black"
                                                }
                                            }>"Absent"</span>
                                        </label>
                                    </div>

                                    <Show
                                        when=move || choice.get() == AttendanceChoice::Absent
                                        fallback=|| ()
                                    >
                                        <div class="mb-6">
                                            <label
                                                for="reason"
                                                class="mb-2 block text-black dark:text-white"
                                            >
                                                "Motif d'absence"
                                            </label>
                                            <textarea
                                                id="reason"
                                                name="reason"
                                                rows="4"
                                                class="w-full rounded border border-stroke bg-transparent py-2 px-4 text-black focus:outline-none dark:text-white"
                                                placeholder="Entrez votre motif d'absence"
                                                prop:value=reason
                                                on:input=move |ev| {
                                                    reason.set(event_target_value(&ev))
                                                }
                                            ></textarea>
                                        </div>
                                    </Show>

                                    <div class="flex justify-center gap-4">
                                        <button
                                            type="submit"
                                            disabled=move || !submittable()
                                            class=move || {
                                                if submittable() {
                                                    "flex justify-center rounded bg-blue-600 py-2 px-6 font-medium text-white hover:bg-opacity-90"
                                                } else {
                                                    "flex justify-center rounded bg-gray-400 py-2 px-6 font-medium text-white"
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
                        }
                            .into_view()
                    }
                }}
            </div>

            <HistoryDialog
                state=history
                title=String::from("VOTRE SITUATION...")
                totals_prefix=String::from("Vous totalisez")
                status_prefix="J'étais"
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, student_session};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::geolocation::UNSUPPORTED_MESSAGE;

    // Without a browser runtime the geolocation probe reports "unsupported"
    // synchronously, which is exactly the blocking branch.
    #[test]
    fn headless_render_blocks_submission_on_missing_geolocation() {
        let html = render_to_string(move || {
            provide_session(Some(student_session()));
            view! { <StudentCheckInPanel /> }
        });
        assert!(html.contains("Marquez votre présence ou absence"));
        assert!(html.contains("Voir mon historique"));
        if !html.contains(WEEKEND_MESSAGE) {
            assert!(html.contains(UNSUPPORTED_MESSAGE));
        }
    }
}
