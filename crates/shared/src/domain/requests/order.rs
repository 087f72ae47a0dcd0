use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Any status supplied here is ignored; new orders always start PENDING.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[schema(example = "PENDING")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[schema(example = "COMPLETED")]
    pub status: Option<String>,
}
