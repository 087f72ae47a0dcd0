use crate::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{id, status}` projection returned by create/get/update.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            status: value.status,
        }
    }
}

/// Full row returned by list. The password hash never leaves the service.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecordResponse {
    pub id: i32,
    pub status: String,
    pub client_email: Option<String>,
    pub created: String,
}

impl From<Order> for OrderRecordResponse {
    fn from(value: Order) -> Self {
        OrderRecordResponse {
            id: value.id,
            status: value.status,
            client_email: value.client_email,
            created: value.created.to_string(),
        }
    }
}
