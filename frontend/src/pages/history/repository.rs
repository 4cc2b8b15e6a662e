use crate::api::{
    ApiClient, ApiError, AttendanceRecord, AttendanceStatus, MessageResponse, Role,
    SubmitAttendanceRequest, UserSummary,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct StudentsRepository {
    client: Rc<ApiClient>,
}

impl StudentsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.client.list_users().await
    }

    pub async fn history(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.attendance_history(student_id).await
    }

    /// Marks on behalf of a student; the role in the body is the caller's.
    pub async fn mark(
        &self,
        student_id: String,
        role: Role,
        status: AttendanceStatus,
        reason: Option<String>,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .submit_attendance(SubmitAttendanceRequest {
                student_id,
                role,
                status,
                reason,
                latitude: None,
                longitude: None,
            })
            .await
    }

    pub async fn delete(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete_user(user_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SESSION_TOKEN_KEY;
    use crate::utils::storage;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn admin_mark_present_posts_without_reason_or_coordinates() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/attendance").json_body(json!({
                    "studentId": "stu-1",
                    "role": "admin",
                    "status": "present"
                }));
                then.status(200).json_body(json!({ "message": "Présence enregistrée" }));
            })
            .await;

        storage::set_item(SESSION_TOKEN_KEY, "jeton-admin");
        let repo = StudentsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let resp = repo
            .mark("stu-1".into(), Role::Admin, AttendanceStatus::Present, None)
            .await
            .unwrap();
        storage::remove_item(SESSION_TOKEN_KEY);
        mock.assert_async().await;
        assert_eq!(resp.message, "Présence enregistrée");
    }

    #[tokio::test]
    async fn list_unwraps_the_data_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user");
                then.status(200).json_body(json!({
                    "data": [
                        { "_id": "u1", "name": "Aissatou Bah", "phoneNumber": "620000000", "status": "active" }
                    ]
                }));
            })
            .await;

        storage::set_item(SESSION_TOKEN_KEY, "jeton-admin");
        let repo = StudentsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let users = repo.list().await.unwrap();
        storage::remove_item(SESSION_TOKEN_KEY);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u1");
        assert_eq!(users[0].phone_number, "620000000");
    }
}
