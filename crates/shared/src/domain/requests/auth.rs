use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "clientEmail must be a valid email address"))]
    #[schema(example = "client@example.com")]
    pub client_email: String,

    #[validate(length(min = 1, message = "clientPassword must not be empty"))]
    pub client_password: String,
}
