mod auth;
mod order;
mod product;

pub use self::auth::AuthService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
