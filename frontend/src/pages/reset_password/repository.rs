use crate::api::{ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset(
        &self,
        token: &str,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(token, new_password).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn reset_posts_token_in_path_and_password_in_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/reset-password/tok-42")
                    .json_body(json!({ "newPassword": "S3cret!mot" }));
                then.status(200)
                    .json_body(json!({ "message": "Mot de passe réinitialisé" }));
            })
            .await;

        let repo = ResetPasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.base_url()),
        ));
        let resp = repo.reset("tok-42", "S3cret!mot".into()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(resp.message, "Mot de passe réinitialisé");
    }
}
