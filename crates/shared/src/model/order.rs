use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub status: String,
    pub client_email: Option<String>,
    pub client_password_hash: Option<String>,
    pub created: NaiveDateTime,
}
