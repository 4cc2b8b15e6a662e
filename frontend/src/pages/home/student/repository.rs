use crate::api::{ApiClient, ApiError, AttendanceRecord, MessageResponse, SubmitAttendanceRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct StudentRepository {
    client: Rc<ApiClient>,
}

impl StudentRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(
        &self,
        request: SubmitAttendanceRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.submit_attendance(request).await
    }

    pub async fn history(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.attendance_history(student_id).await
    }
}
