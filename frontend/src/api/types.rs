use serde::{Deserialize, Serialize};

pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur est survenue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Flat identity+token object returned by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List endpoints wrap their payload as `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "studentId", default)]
    pub student_id: String,
    /// Raw backend timestamp; display formatting happens view-side.
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAttendanceRequest {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub role: Role,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    /// "active" or "inactive".
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl leptos::IntoView for ApiError {
    fn into_view(self) -> leptos::View {
        self.message.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "CONFIGURATION".to_string(),
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "UNKNOWN".to_string(),
        }
    }

    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let code = match status {
            400 => "BAD_REQUEST",
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            500..=599 => "SERVER_ERROR",
            _ => "REQUEST_FAILED",
        };
        Self {
            message: message.into(),
            code: code.to_string(),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        self.code == "FORBIDDEN"
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}
