use crate::api::{ApiClient, AttendanceRecord};
use crate::components::common::LoadingSpinner;
use crate::utils::time;
use leptos::*;

pub const EMPTY_ROSTER_MESSAGE: &str = "Aucune présence enregistrée encore pour la journée.";

fn reason_cell(record: &AttendanceRecord) -> String {
    record.reason.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn AdminRosterPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let roster = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.daily_attendance().await }
        },
    );

    view! {
        <div class="mx-auto max-w-270 p-6">
            <div class="mb-3 flex items-end justify-between">
                <h3 class="font-medium text-black dark:text-white">
                    "Présences du jour"
                </h3>
                <a
                    href="/add-user"
                    class="inline-flex items-center justify-center rounded-md border border-blue-600 py-2 px-6 text-center font-medium text-blue-600"
                >
                    "Ajouter un utilisateur"
                </a>
            </div>
            <div class="rounded-sm border border-stroke bg-white shadow-default dark:border-strokedark dark:bg-boxdark">
                {move || match roster.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => {
                        view! {
                            <p class="p-4 text-red-500">{err.to_string()}</p>
                        }
                            .into_view()
                    }
                    Some(Ok(records)) if records.is_empty() => {
                        view! {
                            <p class="p-4 text-center text-black dark:text-white">
                                {EMPTY_ROSTER_MESSAGE}
                            </p>
                        }
                            .into_view()
                    }
                    Some(Ok(records)) => {
                        view! {
                            <table class="w-full table-auto">
                                <thead>
                                    <tr class="bg-gray-2 text-left dark:bg-meta-4">
                                        <th class="py-4 px-4 font-medium text-black dark:text-white">
                                            "Nom"
                                        </th>
                                        <th class="py-4 px-4 font-medium text-black dark:text-white">
                                            "Email"
                                        </th>
                                        <th class="py-4 px-4 font-medium text-black dark:text-white">
                                            "Pointé le"
                                        </th>
                                        <th class="py-4 px-4 font-medium text-black dark:text-white">
                                            "Statut"
                                        </th>
                                        <th class="py-4 px-4 font-medium text-black dark:text-white">
                                            "Motif"
                                        </th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || records.clone()
                                        key=|record| record.id.clone()
                                        children=move |record| {
                                            let reason = reason_cell(&record);
                                            view! {
                                                <tr class="border-b border-stroke dark:border-strokedark">
                                                    <td class="py-4 px-4 text-black dark:text-white">
                                                        {record.name.clone()}
                                                    </td>
                                                    <td class="py-4 px-4 text-black dark:text-white">
                                                        {record.email.clone()}
                                                    </td>
                                                    <td class="py-4 px-4 text-black dark:text-white">
                                                        {time::format_roster_time(&record.date)}
                                                    </td>
                                                    <td class="py-4 px-4 font-medium text-black dark:text-white">
                                                        {record.status.as_str().to_uppercase()}
                                                    </td>
                                                    <td class="py-4 px-4 text-black dark:text-white">
                                                        {reason}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AttendanceStatus;

    #[test]
    fn missing_reason_renders_a_dash() {
        let record = AttendanceRecord {
            id: "a1".into(),
            student_id: "stu-1".into(),
            date: "2024-12-12T08:30:00.000Z".into(),
            status: AttendanceStatus::Present,
            reason: None,
            name: "Aissatou Bah".into(),
            email: "aissatou@simplon.co".into(),
        };
        assert_eq!(reason_cell(&record), "-");
    }
}
