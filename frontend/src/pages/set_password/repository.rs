use crate::api::{ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct SetPasswordRepository {
    client: Rc<ApiClient>,
}

impl SetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn verify_token(&self, token: String) -> Result<MessageResponse, ApiError> {
        self.client.verify_token(token).await
    }

    pub async fn save_password(
        &self,
        token: String,
        password: String,
    ) -> Result<MessageResponse, ApiError> {
        self.client.save_password(token, password).await
    }
}
