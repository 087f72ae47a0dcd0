use crate::{config::Claims, errors::ServiceError};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
pub trait JwtServiceTrait {
    fn generate_token(&self, order_id: i64, client_email: &str) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError>;
}
