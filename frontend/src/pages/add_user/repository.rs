use crate::api::{AddUserRequest, ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AddUserRepository {
    client: Rc<ApiClient>,
}

impl AddUserRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn add(&self, request: AddUserRequest) -> Result<MessageResponse, ApiError> {
        self.client.add_user(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::state::session::SESSION_TOKEN_KEY;
    use crate::utils::storage;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn add_posts_lowercase_role_and_camel_case_phone_field() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/add").json_body(json!({
                    "name": "Ibrahim Bah",
                    "email": "ibrahim@simplon.co",
                    "phoneNumber": "620000000",
                    "role": "student"
                }));
                then.status(201).json_body(json!({ "message": "Utilisateur créé" }));
            })
            .await;

        storage::set_item(SESSION_TOKEN_KEY, "jeton-admin");
        let repo = AddUserRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let resp = repo
            .add(AddUserRequest {
                name: "Ibrahim Bah".into(),
                email: "ibrahim@simplon.co".into(),
                phone_number: "620000000".into(),
                role: Role::Student,
            })
            .await
            .unwrap();
        storage::remove_item(SESSION_TOKEN_KEY);
        mock.assert_async().await;
        assert_eq!(resp.message, "Utilisateur créé");
    }
}
