//! Shared attendance-history modal: totals, exact date lookup and the
//! chronological timeline. Used by the student home panel and by the
//! per-student action menu on the admin roster.

use crate::api::{AttendanceRecord, AttendanceStatus};
use crate::utils::time;
use chrono::NaiveDate;
use leptos::*;

pub const EMPTY_DATE_MESSAGE: &str = "Veuillez entrer une date valide.";
pub const NOT_FOUND_MESSAGE: &str = "Aucun enregistrement trouvé pour cette date.";

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub display_date: String,
    pub status: AttendanceStatus,
    pub reason: Option<String>,
}

/// Normalizes raw backend records for display; dates become `DD/MM/YYYY`.
pub fn to_entries(records: Vec<AttendanceRecord>) -> Vec<HistoryEntry> {
    records
        .into_iter()
        .map(|record| HistoryEntry {
            id: record.id,
            display_date: time::format_history_date(&record.date),
            status: record.status,
            reason: record.reason.filter(|r| !r.is_empty()),
        })
        .collect()
}

pub fn present_count(entries: &[HistoryEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.status == AttendanceStatus::Present)
        .count()
}

pub fn absent_count(entries: &[HistoryEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.status == AttendanceStatus::Absent)
        .count()
}

/// The date picker hands us `YYYY-MM-DD`; the match is exact string
/// equality after normalizing to the display format.
pub fn find_by_input_date(entries: &[HistoryEntry], input: &str) -> Option<HistoryEntry> {
    let wanted = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()?
        .format(time::HISTORY_DATE_FORMAT)
        .to_string();
    entries
        .iter()
        .find(|entry| entry.display_date == wanted)
        .cloned()
}

#[derive(Clone, Copy)]
pub struct HistoryDialogState {
    pub open: RwSignal<bool>,
    pub entries: RwSignal<Vec<HistoryEntry>>,
    pub search_date: RwSignal<String>,
    pub search_error: RwSignal<Option<String>>,
    pub matched: RwSignal<Option<HistoryEntry>>,
    pub show_reason: RwSignal<bool>,
}

impl HistoryDialogState {
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
            entries: create_rw_signal(Vec::new()),
            search_date: create_rw_signal(String::new()),
            search_error: create_rw_signal(None),
            matched: create_rw_signal(None),
            show_reason: create_rw_signal(false),
        }
    }

    /// Every open starts from a fresh fetch; nothing is cached between opens.
    pub fn open_with(&self, entries: Vec<HistoryEntry>) {
        self.entries.set(entries);
        self.clear_search();
        self.show_reason.set(false);
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn search(&self, input: &str) {
        self.search_error.set(None);
        if input.is_empty() {
            self.search_error.set(Some(EMPTY_DATE_MESSAGE.to_string()));
            return;
        }
        self.search_date.set(input.to_string());
        match find_by_input_date(&self.entries.get_untracked(), input) {
            Some(entry) => self.matched.set(Some(entry)),
            None => {
                self.matched.set(None);
                self.search_error.set(Some(NOT_FOUND_MESSAGE.to_string()));
            }
        }
    }

    pub fn clear_search(&self) {
        self.search_date.set(String::new());
        self.matched.set(None);
        self.search_error.set(None);
    }
}

impl Default for HistoryDialogState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
fn TimelineItem(
    entry: HistoryEntry,
    status_prefix: &'static str,
    show_reason: RwSignal<bool>,
) -> impl IntoView {
    let status_class = if entry.status == AttendanceStatus::Present {
        "rounded bg-green-100 py-1 px-3 text-lg font-medium text-green-800"
    } else {
        "rounded bg-red-100 py-1 px-3 text-lg font-medium text-red-800"
    };
    let status_text = entry.status.as_str().to_uppercase();
    let reason = entry.reason.clone();
    view! {
        <li class="mb-6 border-l border-stroke pl-4">
            <p class="text-black dark:text-white">
                "Le " <span class="font-medium">{entry.display_date.clone()}</span>
            </p>
            <p class=status_class>{format!("{} {}", status_prefix, status_text)}</p>
            {reason
                .map(|reason| {
                    view! {
                        <div class="mt-3">
                            <button
                                type="button"
                                class="rounded border border-stroke px-3 py-1 text-sm"
                                on:click=move |_| show_reason.update(|v| *v = !*v)
                            >
                                {move || if show_reason.get() { "Fermer" } else { "Voir le motif" }}
                            </button>
                            <Show when=move || show_reason.get() fallback=|| ()>
                                <p class="mt-2 text-black dark:text-white">{reason.clone()}</p>
                            </Show>
                        </div>
                    }
                        .into_view()
                })
                .unwrap_or_else(|| ().into_view())}
        </li>
    }
}

#[component]
pub fn HistoryDialog(
    state: HistoryDialogState,
    #[prop(into)] title: MaybeSignal<String>,
    /// "Vous totalisez" for the student view, "<nom> totalise" for admins.
    #[prop(into)] totals_prefix: MaybeSignal<String>,
    /// "J'étais" for the student view, "l'étudiant a été" for admins.
    status_prefix: &'static str,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let totals_prefix = Signal::derive(move || totals_prefix.get());
    let entries = state.entries;
    let matched = state.matched;
    let search_error = state.search_error;
    let show_reason = state.show_reason;

    view! {
        <Show when=move || state.open.get() fallback=|| ()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
                <div class="max-h-[80vh] w-full max-w-2xl overflow-y-auto rounded bg-white p-6 shadow-lg dark:bg-boxdark">
                    <h3 class="mb-4 text-lg font-semibold text-black dark:text-white">
                        {move || title.get()}
                    </h3>
                    <p class="text-lg leading-relaxed text-black dark:text-white">
                        {move || totals_prefix.get()}
                        " "
                        <span class="text-lg font-medium">
                            {move || format!("{} PRÉSENCE(S)", present_count(&entries.get()))}
                        </span>
                        " et "
                        <span class="text-lg font-medium">
                            {move || format!("{} ABSENCE(S)", absent_count(&entries.get()))}
                        </span>
                    </p>

                    <div class="my-4">
                        <label for="search-date" class="text-black dark:text-white">
                            "Rechercher une date particulière..."
                        </label>
                        <div class="flex items-center justify-center gap-5">
                            <input
                                type="date"
                                id="search-date"
                                class="w-full bg-transparent pl-2 pr-4 text-black focus:outline-none dark:text-white"
                                prop:value=state.search_date
                                on:input=move |ev| state.search(&event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="inline-flex items-center justify-center border border-blue-600 py-2 px-5 text-center font-medium text-blue-600"
                                on:click=move |_| state.clear_search()
                            >
                                "Réinitialiser"
                            </button>
                        </div>
                    </div>

                    <ul class="max-h-96 overflow-y-auto">
                        {move || {
                            if let Some(entry) = matched.get() {
                                view! {
                                    <TimelineItem
                                        entry=entry
                                        status_prefix=status_prefix
                                        show_reason=show_reason
                                    />
                                }
                                    .into_view()
                            } else if let Some(message) = search_error.get() {
                                view! {
                                    <span class="flex items-center justify-center text-lg text-red-500">
                                        {message}
                                    </span>
                                }
                                    .into_view()
                            } else {
                                view! {
                                    <For
                                        each=move || entries.get()
                                        key=|entry| entry.id.clone()
                                        children=move |entry| {
                                            view! {
                                                <TimelineItem
                                                    entry=entry
                                                    status_prefix=status_prefix
                                                    show_reason=show_reason
                                                />
                                            }
                                        }
                                    />
                                }
                                    .into_view()
                            }
                        }}
                    </ul>

                    <div class="mt-4 flex items-end justify-end">
                        <button
                            type="button"
                            class="rounded border border-stroke px-4 py-2"
                            on:click=move |_| state.close()
                        >
                            "Fermer"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    fn entry(id: &str, display_date: &str, status: AttendanceStatus) -> HistoryEntry {
        HistoryEntry {
            id: id.into(),
            display_date: display_date.into(),
            status,
            reason: None,
        }
    }

    #[test]
    fn search_state_flags_misses_and_clears() {
        with_runtime(|| {
            let state = HistoryDialogState::new();
            state.open_with(vec![entry("a1", "12/12/2024", AttendanceStatus::Present)]);

            state.search("2024-12-12");
            assert!(state.matched.get_untracked().is_some());
            assert!(state.search_error.get_untracked().is_none());

            state.search("2024-12-25");
            assert!(state.matched.get_untracked().is_none());
            assert_eq!(
                state.search_error.get_untracked().as_deref(),
                Some(NOT_FOUND_MESSAGE)
            );

            state.clear_search();
            assert!(state.search_error.get_untracked().is_none());
            assert!(state.search_date.get_untracked().is_empty());
        });
    }

    #[test]
    fn dialog_renders_totals_and_timeline() {
        let html = render_to_string(move || {
            let state = HistoryDialogState::new();
            state.open_with(vec![
                entry("a1", "12/12/2024", AttendanceStatus::Present),
                entry("a2", "13/12/2024", AttendanceStatus::Absent),
            ]);
            view! {
                <HistoryDialog
                    state=state
                    title=String::from("VOTRE SITUATION...")
                    totals_prefix=String::from("Vous totalisez")
                    status_prefix="J'étais"
                />
            }
        });
        assert!(html.contains("1 PRÉSENCE(S)"));
        assert!(html.contains("1 ABSENCE(S)"));
        assert!(html.contains("12/12/2024"));
        assert!(html.contains("J'étais PRESENT"));
    }
}
