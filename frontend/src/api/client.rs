use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    api::types::*,
    config,
    state::session::{SESSION_TOKEN_KEY, SESSION_USER_KEY},
    utils::storage,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> Result<String, ApiError> {
        if let Some(base) = &self.base_url {
            Ok(base.clone())
        } else {
            config::await_api_base_url().await
        }
    }

    fn get_auth_headers(&self) -> Result<reqwest::header::HeaderMap, ApiError> {
        let token = storage::get_item(SESSION_TOKEN_KEY).ok_or_else(|| {
            ApiError::from_status(401, "Session introuvable. Veuillez vous reconnecter.")
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unknown("Jeton de session invalide"))?,
        );
        Ok(headers)
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_persisted_session();
            Self::redirect_to_login_if_needed();
        }
    }

    fn clear_persisted_session() {
        storage::remove_item(SESSION_TOKEN_KEY);
        storage::remove_item(SESSION_USER_KEY);
    }

    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        ApiError::from_status(status, message)
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/auth/logout", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn forgot_password(&self, email: String) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/auth/forgot-password", base_url))
            .json(&ForgotPasswordRequest { email })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/auth/reset-password/{}", base_url, token))
            .json(&ResetPasswordRequest { new_password })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn verify_token(&self, token: String) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/auth/verify-token", base_url))
            .json(&VerifyTokenRequest { token })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn save_password(
        &self,
        token: String,
        password: String,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/auth/save-password", base_url))
            .json(&SavePasswordRequest { token, password })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Today's roster, admin only. Bare array response.
    pub async fn daily_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .get(format!("{}/attendance/daily", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// One subject's full history. Enveloped response.
    pub async fn attendance_history(
        &self,
        subject_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .get(format!("{}/attendance/{}/history", base_url, subject_id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            let envelope: DataEnvelope<Vec<AttendanceRecord>> = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))?;
            Ok(envelope.data)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn submit_attendance(
        &self,
        request: SubmitAttendanceRequest,
    ) -> Result<MessageResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/attendance", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// All users, admin only. Enveloped response.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .get(format!("{}/user", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            let envelope: DataEnvelope<Vec<UserSummary>> = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))?;
            Ok(envelope.data)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn add_user(&self, request: AddUserRequest) -> Result<MessageResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .post(format!("{}/user/add", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await?;
        let response = self
            .client
            .delete(format!("{}/user/{}", base_url, user_id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Échec de la requête: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Réponse illisible: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    fn install_token(token: &str) {
        storage::set_item(SESSION_TOKEN_KEY, token);
    }

    #[tokio::test]
    async fn login_parses_flat_identity() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(serde_json::json!({
                    "email": "aissatou@simplon.co",
                    "password": "Abcdefg1!"
                }));
            then.status(200).json_body(serde_json::json!({
                "_id": "u-1",
                "name": "Aissatou Bah",
                "email": "aissatou@simplon.co",
                "role": "student",
                "token": "jwt-token"
            }));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let response = api
            .login(LoginRequest {
                email: "aissatou@simplon.co".into(),
                password: "Abcdefg1!".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.id, "u-1");
        assert_eq!(response.role, Role::Student);
    }

    #[tokio::test]
    async fn login_failure_surfaces_backend_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(serde_json::json!({ "message": "Identifiants incorrects" }));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = api
            .login(LoginRequest {
                email: "a@b.co".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Identifiants incorrects");
        assert_eq!(err.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn unparsable_error_body_falls_back_to_generic_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/forgot-password");
            then.status(500).body("boom");
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = api.forgot_password("a@b.co".into()).await.unwrap_err();
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
        assert_eq!(err.code, "SERVER_ERROR");
    }

    #[tokio::test]
    async fn submit_attendance_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/attendance")
                .header("authorization", "Bearer jeton-1")
                .json_body(serde_json::json!({
                    "studentId": "stu-1",
                    "role": "student",
                    "status": "absent",
                    "reason": "maladie"
                }));
            then.status(200)
                .json_body(serde_json::json!({ "message": "Enregistré" }));
        });

        install_token("jeton-1");
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let response = api
            .submit_attendance(SubmitAttendanceRequest {
                student_id: "stu-1".into(),
                role: Role::Student,
                status: AttendanceStatus::Absent,
                reason: Some("maladie".into()),
                latitude: None,
                longitude: None,
            })
            .await
            .unwrap();
        assert_eq!(response.message, "Enregistré");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn attendance_history_unwraps_data_envelope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/stu-1/history");
            then.status(200).json_body(serde_json::json!({
                "data": [{
                    "_id": "att-1",
                    "studentId": "stu-1",
                    "date": "2024-12-12T08:30:00.000Z",
                    "status": "present",
                    "reason": null,
                    "name": "Aissatou Bah",
                    "email": "aissatou@simplon.co"
                }]
            }));
        });

        install_token("jeton-1");
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let history = api.attendance_history("stu-1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn missing_token_refuses_authenticated_calls() {
        storage::remove_item(SESSION_TOKEN_KEY);
        let api = ApiClient::new_with_base_url("http://localhost:1");
        let err = api.daily_attendance().await.unwrap_err();
        assert_eq!(err.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn delete_user_returns_backend_confirmation() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/user/u-2");
            then.status(200)
                .json_body(serde_json::json!({ "message": "Étudiant supprimé" }));
        });

        install_token("jeton-1");
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let response = api.delete_user("u-2").await.unwrap();
        assert_eq!(response.message, "Étudiant supprimé");
    }
}
