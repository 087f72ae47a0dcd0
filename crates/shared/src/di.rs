use crate::{
    abstract_trait::{
        DynAuthService, DynHashing, DynJwtService, DynOrderCommandService, DynOrderQueryService,
        DynProductCommandService, DynProductQueryService,
    },
    config::ConnectionPool,
    repository::{OrderRepository, ProductRepository},
    service::{
        AuthService, OrderCommandService, OrderQueryService, ProductCommandService,
        ProductQueryService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub auth_service: DynAuthService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"<OrderQueryService>")
            .field("order_command", &"<OrderCommandService>")
            .field("product_query", &"<ProductQueryService>")
            .field("product_command", &"<ProductCommandService>")
            .field("auth_service", &"<AuthService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hash: DynHashing, jwt_config: DynJwtService) -> Self {
        let order_repository = OrderRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool);

        let order_query =
            Arc::new(OrderQueryService::new(order_repository.query.clone())) as DynOrderQueryService;
        let order_command =
            Arc::new(OrderCommandService::new(order_repository.command)) as DynOrderCommandService;

        let product_query = Arc::new(ProductQueryService::new(product_repository.query))
            as DynProductQueryService;
        let product_command = Arc::new(ProductCommandService::new(product_repository.command))
            as DynProductCommandService;

        let auth_service =
            Arc::new(AuthService::new(hash, jwt_config, order_repository.query)) as DynAuthService;

        Self {
            order_query,
            order_command,
            product_query,
            product_command,
            auth_service,
        }
    }
}
