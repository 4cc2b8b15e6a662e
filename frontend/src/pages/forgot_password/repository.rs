use crate::api::{ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_reset(&self, email: String) -> Result<MessageResponse, ApiError> {
        self.client.forgot_password(email).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn request_reset_returns_backend_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/forgot-password")
                    .json_body(json!({ "email": "aissatou@simplon.co" }));
                then.status(200)
                    .json_body(json!({ "message": "Email de réinitialisation envoyé" }));
            })
            .await;

        let repo = ForgotPasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.base_url()),
        ));
        let resp = repo
            .request_reset("aissatou@simplon.co".into())
            .await
            .unwrap();
        assert_eq!(resp.message, "Email de réinitialisation envoyé");
    }
}
