mod api;
mod auth;
mod order;
mod product;

pub use self::api::ApiResponse;
pub use self::auth::LoginResponse;
pub use self::order::{OrderRecordResponse, OrderResponse};
pub use self::product::ProductResponse;
