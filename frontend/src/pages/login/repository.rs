use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        self.client.login(LoginRequest { email, password }).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_surfaces_backend_failure_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401)
                    .json_body(json!({ "message": "Identifiants invalides" }));
            })
            .await;

        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let err = repo
            .login("aissatou@simplon.co".into(), "mauvais".into())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Identifiants invalides");
    }
}
