mod auth;
mod order;
mod pagination;
mod product;

pub use self::auth::LoginRequest;
pub use self::order::{CreateOrderRequest, UpdateOrderRequest};
pub use self::pagination::Pagination;
pub use self::product::{CreateProductRequest, UpdateProductRequest};
