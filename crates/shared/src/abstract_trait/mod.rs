mod auth;
mod hashing;
mod jwt;
mod order;
mod product;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};

#[cfg(test)]
pub use self::hashing::MockHashingTrait;
#[cfg(test)]
pub use self::jwt::MockJwtServiceTrait;
#[cfg(test)]
pub use self::order::{MockOrderCommandRepositoryTrait, MockOrderQueryRepositoryTrait};
#[cfg(test)]
pub use self::product::{MockProductCommandRepositoryTrait, MockProductQueryRepositoryTrait};
